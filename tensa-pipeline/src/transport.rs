//! Remote analysis boundary
//!
//! [`AnalysisTransport`] is the seam between the orchestrator and wherever
//! the analyzer actually runs. The HTTP implementation talks JSON to the
//! tutoring service; the local implementation runs the same rule set in
//! process and is what the fallback path and tests build on. Both must
//! produce identical results for identical input, because the analyzer is a
//! pure function on either side of the boundary.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tensa_analyzer::{analyze, quick_classify, AnalysisResult, QuickClassification};
use tensa_config::RemoteConfig;

use crate::error::TransportError;

/// Where analysis requests go. Auth headers, rate limiting and persistence
/// are the caller's concern, not the transport's.
#[async_trait]
pub trait AnalysisTransport: Send + Sync + 'static {
    /// Full classification of one sentence.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, TransportError>;

    /// Cheap role/tense subset for the quick path.
    async fn quick_classify(&self, text: &str) -> Result<QuickClassification, TransportError>;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// JSON-over-HTTP transport to the analysis service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(remote: &RemoteConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(remote.timeout_ms))
            .build()
            .map_err(|e| TransportError::Unavailable(format!("http client build: {e}")))?;
        Ok(Self {
            http,
            base_url: remote.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        text: &str,
    ) -> Result<T, TransportError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Unavailable(format!(
                "{url} returned {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl AnalysisTransport for HttpTransport {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, TransportError> {
        self.post_json("analyze", text).await
    }

    async fn quick_classify(&self, text: &str) -> Result<QuickClassification, TransportError> {
        self.post_json("quick-classify", text).await
    }
}

/// In-process transport running the same rule set directly. Infallible by
/// construction; used for demos, tests, and as the reference the HTTP
/// service must agree with.
#[derive(Debug, Clone, Default)]
pub struct LocalTransport;

impl LocalTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalysisTransport for LocalTransport {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, TransportError> {
        Ok(analyze(text))
    }

    async fn quick_classify(&self, text: &str) -> Result<QuickClassification, TransportError> {
        Ok(quick_classify(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensa_analyzer::TenseType;

    #[tokio::test]
    async fn local_transport_matches_direct_calls() {
        let transport = LocalTransport::new();
        let via_transport = transport
            .analyze("I was studying when you called")
            .await
            .expect("local transport is infallible");
        assert_eq!(via_transport, analyze("I was studying when you called"));
        assert_eq!(via_transport.tense_type, TenseType::PastContinuous);
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_unavailable() {
        let remote = RemoteConfig {
            // Reserved TEST-NET-1 address; nothing listens there.
            base_url: "http://192.0.2.1:9".to_string(),
            timeout_ms: 200,
        };
        let transport = HttpTransport::new(&remote).expect("client builds");
        match transport.analyze("I was studying").await {
            Err(TransportError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
