use crate::api::models::{CleanupReport, ErrorBody, FetchReport, HealthReport};
use crate::api::{Action, HEALTH_PATH};
use crate::error::AppError;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for the ingestion server's action endpoints.
#[derive(Debug, Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    base: Url,
}

impl ServerClient {
    pub fn new(base: Url) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base.join(path)?)
    }

    pub async fn fetch_emails(&self) -> Result<FetchReport, AppError> {
        let url = self.endpoint(Action::FetchEmails.path())?;
        tracing::debug!("GET {}", url);
        let res = self.http.get(url).send().await?;
        decode_json(res).await
    }

    /// The server only routes POST here. No body is sent.
    pub async fn cleanup_emails(&self) -> Result<CleanupReport, AppError> {
        let url = self.endpoint(Action::CleanupEmails.path())?;
        tracing::debug!("POST {}", url);
        let res = self.http.post(url).send().await?;
        decode_json(res).await
    }

    pub async fn health(&self) -> Result<HealthReport, AppError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let res = self.http.get(url).send().await?;
        decode_json(res).await
    }
}

async fn decode_json<T: DeserializeOwned>(res: Response) -> Result<T, AppError> {
    let status = res.status();
    let body = res.bytes().await?;

    if !status.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
        return Err(AppError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
