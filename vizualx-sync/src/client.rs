//! Provider heartbeat client

use crate::config::HeartbeatConfig;
use crate::errors::SyncResult;
use crate::types::{ErrorKind, HeartbeatResult, Provider};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use std::time::Instant;
use tracing::{debug, warn};
use vizualx_config::{ProviderConfig, ProvidersConfig};

/// Liveness probe for a single provider.
///
/// Implementations never fail: every outcome, including timeouts and
/// missing configuration, is encoded in the returned [`HeartbeatResult`].
#[async_trait::async_trait]
pub trait HeartbeatProbe: Send + Sync {
    async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult;
}

/// HTTP heartbeat checker backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HeartbeatChecker {
    client: Client,
    providers: ProvidersConfig,
    config: HeartbeatConfig,
}

/// Probe failure before it is folded into a [`HeartbeatResult`]
#[derive(Debug)]
struct ProbeFailure {
    kind: ErrorKind,
    message: String,
}

impl ProbeFailure {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl HeartbeatChecker {
    /// Create a checker for the given provider endpoints
    pub fn new(providers: ProvidersConfig, config: HeartbeatConfig) -> SyncResult<Self> {
        debug!(
            "Creating HeartbeatChecker with timeout: {}ms",
            config.timeout.as_millis()
        );

        // Overall probe time is bounded by tokio::time::timeout in check_heartbeat;
        // the connect timeout only keeps stalled handshakes from lingering.
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .redirect(reqwest::redirect::Policy::limited(
                config.max_redirects as usize,
            ))
            .build()?;

        Ok(Self {
            client,
            providers,
            config,
        })
    }

    /// Configuration of the given provider
    pub fn provider_config(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::Github => &self.providers.github,
            Provider::Cloud => &self.providers.cloud,
            Provider::Cdn => &self.providers.cdn,
        }
    }

    pub fn config(&self) -> &HeartbeatConfig {
        &self.config
    }

    fn request_headers(provider: Provider, endpoint: &ProviderConfig) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if provider == Provider::Github {
            headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        } else if endpoint.expect_json {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        if let Some(token) = endpoint.auth_token.as_deref() {
            match HeaderValue::from_str(&format!("Bearer {}", token.trim())) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Ignoring {} auth token with invalid header characters", provider),
            }
        }

        headers
    }

    /// Map a transport error onto the heartbeat error taxonomy
    fn classify_request_error(&self, err: reqwest::Error) -> ProbeFailure {
        if err.is_timeout() {
            self.timed_out()
        } else if err.is_decode() || err.is_body() {
            ProbeFailure::new(ErrorKind::BadResponse, "unreadable response body")
        } else if err.is_redirect() {
            ProbeFailure::new(ErrorKind::BadResponse, "too many redirects")
        } else {
            ProbeFailure::new(ErrorKind::Unreachable, "connection failed")
        }
    }

    fn timed_out(&self) -> ProbeFailure {
        ProbeFailure::new(
            ErrorKind::Timeout,
            format!("timed out after {}ms", self.config.timeout.as_millis()),
        )
    }

    /// Issue the probe request and validate the response
    async fn probe(
        &self,
        provider: Provider,
        url: &str,
        endpoint: &ProviderConfig,
    ) -> Result<(), ProbeFailure> {
        let response = self
            .client
            .get(url)
            .headers(Self::request_headers(provider, endpoint))
            .send()
            .await
            .map_err(|e| self.classify_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeFailure::new(
                ErrorKind::BadResponse,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body = response.bytes().await.map_err(|e| self.classify_request_error(e))?;

        if endpoint.expect_json && serde_json::from_slice::<serde_json::Value>(&body).is_err() {
            return Err(ProbeFailure::new(ErrorKind::BadResponse, "invalid JSON body"));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl HeartbeatProbe for HeartbeatChecker {
    async fn check_heartbeat(&self, provider: Provider) -> HeartbeatResult {
        let endpoint = self.provider_config(provider);

        let Some(url) = endpoint.probe_url() else {
            debug!(provider = %provider, "Provider not configured, skipping probe");
            return HeartbeatResult::not_configured(provider);
        };

        debug!(provider = %provider, url = %url, "Checking heartbeat");
        let started = Instant::now();

        let outcome = match tokio::time::timeout(
            self.config.timeout,
            self.probe(provider, &url, endpoint),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(self.timed_out()),
        };

        match outcome {
            Ok(()) => {
                let latency_ms = started.elapsed().as_millis() as u64;
                debug!(provider = %provider, latency_ms, "Heartbeat succeeded");
                HeartbeatResult::reachable(provider, latency_ms)
            }
            Err(failure) => {
                warn!(
                    provider = %provider,
                    error_kind = %failure.kind,
                    "Heartbeat failed: {}",
                    failure.message
                );
                HeartbeatResult::unreachable(provider, failure.kind, failure.message)
            }
        }
    }
}
