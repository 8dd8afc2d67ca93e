use std::time::Duration;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::model::Seat;

use super::defaults::*;

/// Runtime settings for one console run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Server base URL with any trailing slash removed
    pub server_url: String,
    pub preselected_seat: Option<Seat>,
    pub auto_new: bool,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            preselected_seat: None,
            auto_new: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let server_url = args.server.trim().trim_end_matches('/').to_string();
        if server_url.is_empty() {
            return Err(ConfigError::InvalidServerUrl(args.server.clone()));
        }

        let preselected_seat = match &args.seat {
            Some(raw) => Some(Seat::parse(raw).ok_or_else(|| ConfigError::InvalidSeat(raw.clone()))?),
            None => None,
        };

        Ok(Self {
            server_url,
            preselected_seat,
            auto_new: args.auto_new,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(server: &str, seat: Option<&str>) -> Args {
        Args {
            server: server.to_string(),
            seat: seat.map(String::from),
            auto_new: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let settings = Settings::from_args(&args("http://example.test:9000/", None)).unwrap();
        assert_eq!(settings.server_url, "http://example.test:9000");
    }

    #[test]
    fn test_seat_preselection() {
        let settings = Settings::from_args(&args(DEFAULT_SERVER_URL, Some("s"))).unwrap();
        assert_eq!(settings.preselected_seat, Some(Seat::South));
    }

    #[test]
    fn test_bad_seat_is_rejected() {
        let result = Settings::from_args(&args(DEFAULT_SERVER_URL, Some("center")));
        assert!(result.is_err());
    }
}
