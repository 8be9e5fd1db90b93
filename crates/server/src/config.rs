//! Command-line and environment configuration.
//!
//! Every flag can also be set through the environment variable named next to
//! it, so the service runs unmodified in a container with only `PORT` set.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use readproxy_core::{DEFAULT_MAX_BYTES, DEFAULT_USER_AGENT, ExtractConfig, FetchConfig};

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Serve the readable article behind a URL as JSON
#[derive(Parser, Debug, Clone)]
#[command(name = "readproxy")]
#[command(version)]
#[command(about = "Serve the readable article behind a URL as JSON", long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 80)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0", value_name = "ADDR")]
    pub host: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT", default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Maximum upstream body size in bytes (0 = unlimited)
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BYTES, value_name = "BYTES")]
    pub max_bytes: usize,

    /// Custom User-Agent for upstream requests
    #[arg(long, env = "USER_AGENT", value_name = "UA")]
    pub user_agent: Option<String>,

    /// Accept upstream responses that declare a non-HTML content type
    #[arg(long, env = "ALLOW_ANY_CONTENT_TYPE")]
    pub allow_any_content_type: bool,

    /// Minimum character threshold for article content
    #[arg(long, env = "CHAR_THRESHOLD", default_value_t = 500, value_name = "NUM")]
    pub char_threshold: usize,

    /// Maximum number of elements to parse (0 = unlimited)
    #[arg(long, env = "MAX_ELEMENTS", default_value_t = 0, value_name = "NUM")]
    pub max_elements: usize,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: self.timeout,
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_bytes: self.max_bytes,
            require_html: !self.allow_any_content_type,
        }
    }

    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig { max_elements: self.max_elements, char_threshold: self.char_threshold, ..Default::default() }
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
