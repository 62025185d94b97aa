//! The remote puzzle service seam: generate, validate a move, check for a win.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::BoardMatrix,
    error::ApiError,
    protocol::{
        check_win_route, generate_route, validate_move_route, CheckWinRequest, GenerateRequest,
        ValidateMoveRequest,
    },
};
use tracing::{debug, warn};
use url::Url;

use crate::{config::Settings, error::TransportError};

#[async_trait]
pub trait PuzzleService: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<BoardMatrix, TransportError>;
    async fn validate_move(&self, request: &ValidateMoveRequest) -> Result<bool, TransportError>;
    async fn check_win(&self, request: &CheckWinRequest) -> Result<bool, TransportError>;
}

/// Stand-in used when no service endpoint could be configured; every call
/// fails with [`TransportError::Unavailable`].
pub struct UnavailablePuzzleService {
    reason: String,
}

impl UnavailablePuzzleService {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PuzzleService for UnavailablePuzzleService {
    async fn generate(&self, _request: GenerateRequest) -> Result<BoardMatrix, TransportError> {
        Err(TransportError::Unavailable(self.reason.clone()))
    }

    async fn validate_move(&self, _request: &ValidateMoveRequest) -> Result<bool, TransportError> {
        Err(TransportError::Unavailable(self.reason.clone()))
    }

    async fn check_win(&self, _request: &CheckWinRequest) -> Result<bool, TransportError> {
        Err(TransportError::Unavailable(self.reason.clone()))
    }
}

pub struct HttpPuzzleService {
    http: Client,
    base_url: Url,
}

impl HttpPuzzleService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut base_url = Url::parse(base_url).map_err(|err| {
            TransportError::Unavailable(format!("invalid service url '{base_url}': {err}"))
        })?;
        // Routes are joined relative to the base, so keep any path prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Unavailable(format!("http client setup: {err}")))?;
        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        Self::new(
            &settings.server_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, route: &'static str) -> Result<Url, TransportError> {
        self.base_url
            .join(route.trim_start_matches('/'))
            .map_err(|err| TransportError::Request {
                route,
                message: err.to_string(),
            })
    }
}

fn request_failed(route: &'static str, err: reqwest::Error) -> TransportError {
    warn!(route, "puzzle service request failed: {err}");
    TransportError::Request {
        route,
        message: err.to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(
    route: &'static str,
    response: Response,
) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiError>(&body)
            .map(|api| api.message)
            .unwrap_or(body);
        warn!(route, status = status.as_u16(), "puzzle service returned an error status");
        return Err(TransportError::Status {
            route,
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| request_failed(route, err))?;
    serde_json::from_slice(&bytes).map_err(|err| {
        warn!(route, "puzzle service body did not decode: {err}");
        TransportError::Malformed {
            route,
            message: err.to_string(),
        }
    })
}

#[async_trait]
impl PuzzleService for HttpPuzzleService {
    async fn generate(&self, request: GenerateRequest) -> Result<BoardMatrix, TransportError> {
        let route = generate_route();
        debug!(size = request.size, clue_budget = request.clue_budget, "requesting puzzle");
        let response = self
            .http
            .get(self.endpoint(route)?)
            .query(&request)
            .send()
            .await
            .map_err(|err| request_failed(route, err))?;
        read_json(route, response).await
    }

    async fn validate_move(&self, request: &ValidateMoveRequest) -> Result<bool, TransportError> {
        let route = validate_move_route();
        debug!(
            row = request.row,
            col = request.col,
            value = request.value,
            "validating move"
        );
        let response = self
            .http
            .post(self.endpoint(route)?)
            .json(request)
            .send()
            .await
            .map_err(|err| request_failed(route, err))?;
        read_json(route, response).await
    }

    async fn check_win(&self, request: &CheckWinRequest) -> Result<bool, TransportError> {
        let route = check_win_route();
        let response = self
            .http
            .post(self.endpoint(route)?)
            .json(request)
            .send()
            .await
            .map_err(|err| request_failed(route, err))?;
        read_json(route, response).await
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
