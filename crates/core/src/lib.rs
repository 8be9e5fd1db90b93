pub mod article;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod reader;

pub use article::Article;
pub use error::{FailureKind, ReadError, Result};
pub use extract::{ExtractConfig, extract_article};
pub use fetch::{DEFAULT_MAX_BYTES, DEFAULT_USER_AGENT, FetchConfig, FetchedPage, Fetcher, parse_target};
pub use reader::Reader;
