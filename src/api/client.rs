use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::Settings;
use crate::error::{ApiError, ConfigError};
use crate::model::{BidAdvice, Call, Seat, SessionSnapshot};

#[derive(Serialize)]
struct BidRequest {
    position: Seat,
    bid: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateRequest {
    session_id: String,
    position: Seat,
    bid: String,
}

/// The remote session contract: create, fetch, submit, and the tutor's
/// bid evaluation. Legality decisions live on the server; failures are
/// surfaced verbatim and never retried here.
pub struct SessionApi {
    http: Client,
    base: Url,
}

impl SessionApi {
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let base = Url::parse(&settings.server_url)
            .map_err(|e| ConfigError::InvalidServerUrl(format!("{}: {e}", settings.server_url)))?;
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, base })
    }

    pub async fn create_session(&self) -> Result<SessionSnapshot, ApiError> {
        let url = self.endpoint("/api/sessions")?;
        log::info!("creating session at {url}");
        let response = self.http.post(url).send().await?;
        Self::decode(response).await
    }

    pub async fn fetch_session(&self, id: &str) -> Result<SessionSnapshot, ApiError> {
        let url = self.endpoint(&format!("/api/sessions/{id}"))?;
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    /// Submit `call` for `seat`, sending the canonical rendering as the
    /// bid text. Returns the updated snapshot on acceptance.
    pub async fn submit_bid(
        &self,
        id: &str,
        seat: Seat,
        call: &Call,
    ) -> Result<SessionSnapshot, ApiError> {
        let url = self.endpoint(&format!("/api/sessions/{id}/bid"))?;
        let body = BidRequest {
            position: seat,
            bid: call.to_string(),
        };
        log::info!("submitting {} for {}", body.bid, seat);
        let response = self.http.post(url).json(&body).send().await?;
        Self::decode(response).await
    }

    /// Ask the tutor whether `call` matches its recommendation.
    pub async fn evaluate_bid(
        &self,
        id: &str,
        seat: Seat,
        call: &Call,
    ) -> Result<BidAdvice, ApiError> {
        let url = self.endpoint("/api/evaluate-bid")?;
        let body = EvaluateRequest {
            session_id: id.to_string(),
            position: seat,
            bid: call.to_string(),
        };
        let response = self.http.post(url).json(&body).send().await?;
        Self::decode(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::BadUrl(format!("{path}: {e}")))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                return Err(ApiError::Rejected(format!("server returned {status}")));
            }
            return Err(ApiError::Rejected(body.to_string()));
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strain;

    #[test]
    fn test_bid_request_wire_shape() {
        let body = BidRequest {
            position: Seat::North,
            bid: Call::Bid {
                level: 2,
                strain: Strain::NoTrump,
            }
            .to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"position":"North","bid":"2NT"}"#);
    }

    #[test]
    fn test_evaluate_request_uses_camel_case_session_id() {
        let body = EvaluateRequest {
            session_id: "abc".to_string(),
            position: Seat::South,
            bid: "Pass".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(
            json,
            r#"{"sessionId":"abc","position":"South","bid":"Pass"}"#
        );
    }
}
