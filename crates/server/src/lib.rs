pub mod config;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod server;
pub mod types;

pub use config::{Args, LogFormat};
pub use handlers::AppState;
pub use routes::create_router;
pub use server::{serve, shutdown_signal};
pub use types::ResponsePayload;
