/// Default server base URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
