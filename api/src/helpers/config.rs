use std::env;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3131;
const DEFAULT_STATIC_DIR: &str = "../public";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Runtime configuration, read from the environment once at startup.
/// Unparseable numeric values fall back to their defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Front-end asset directory served at `/`.
    pub static_dir: PathBuf,
    /// Optional bound on stored reports; oldest-inserted evicted beyond it.
    pub report_capacity: Option<NonZeroUsize>,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env_u16("PORT", DEFAULT_PORT);
        let static_dir =
            env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
        let report_capacity = env::var("REPORT_CAPACITY")
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .and_then(NonZeroUsize::new);
        let request_timeout = Duration::from_secs(env_u64(
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        ));

        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            static_dir: PathBuf::from(static_dir),
            report_capacity,
            request_timeout,
        }
    }
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
