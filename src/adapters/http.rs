use crate::core::{ExportDocument, ExportRequest, ExportSource};
use crate::utils::error::{PtaError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://pta-export.regex-it.nl/api/export";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60 * 5;

/// 匯出 API 客戶端：以 `Authorization: Token ...` 驗證，表單送出 jaar/klas
pub struct ExportClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ExportClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExportSource for ExportClient {
    async fn fetch(&self, request: &ExportRequest) -> Result<ExportDocument> {
        tracing::debug!("Making export request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .form(&request.form_params())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Export response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PtaError::ExportStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        Ok(ExportDocument {
            filename: request.filename(),
            content_type,
            bytes,
        })
    }
}
