//! Finviz quote page client.

use crate::{Result, error::FinvizError, snapshot::Snapshot};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::{env, time::Duration};
use tracing::{debug, warn};
use warren_traits::{FetchError, MetricsSource, StockMetrics, Ticker};

/// Quote page URL; the ticker goes in the `t` query parameter.
pub const FINVIZ_QUOTE_URL: &str = "https://finviz.com/quote.ashx";

/// Finviz rejects requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the user agent.
pub const USER_AGENT_ENV: &str = "WARREN_USER_AGENT";

/// Configuration for [`FinvizClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinvizConfig {
    /// Quote page URL, without query string
    pub base_url: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for FinvizConfig {
    fn default() -> Self {
        Self {
            base_url: FINVIZ_QUOTE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FinvizConfig {
    /// Point the client at a different host, e.g. a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a custom user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a custom request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Scrapes fundamentals from Finviz quote pages.
#[derive(Debug, Clone)]
pub struct FinvizClient {
    client: Client,
    config: FinvizConfig,
}

impl FinvizClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: FinvizConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client from defaults plus the environment.
    ///
    /// Loads a `.env` file if present and honours `WARREN_USER_AGENT`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = FinvizConfig::default();
        if let Some(agent) = env::var(USER_AGENT_ENV)
            .ok()
            .filter(|agent| !agent.trim().is_empty())
        {
            config.user_agent = agent;
        }
        Self::new(config)
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &FinvizConfig {
        &self.config
    }

    /// Quote page URL for a ticker.
    #[must_use]
    pub fn url(&self, ticker: &Ticker) -> String {
        format!("{}?t={ticker}", self.config.base_url)
    }

    /// Download the raw quote page.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, HTTP 429 or any other
    /// non-success status.
    pub async fn quote_page(&self, ticker: &Ticker) -> Result<String> {
        let url = self.url(ticker);
        debug!(%url, "Requesting Finviz quote page");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FinvizError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(FinvizError::Status {
                status: status.as_u16(),
                ticker: ticker.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Download and parse the snapshot table for a ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched, is Finviz's "not
    /// found" page, or has no snapshot table.
    pub async fn snapshot(&self, ticker: &Ticker) -> Result<Snapshot> {
        let html = self.quote_page(ticker).await?;
        Snapshot::parse(ticker, &html)
    }
}

#[async_trait]
impl MetricsSource for FinvizClient {
    fn name(&self) -> &str {
        "finviz"
    }

    async fn fetch(&self, ticker: &Ticker) -> warren_traits::Result<StockMetrics> {
        match self.snapshot(ticker).await {
            Ok(snapshot) => Ok(snapshot.into_metrics()),
            Err(err) => {
                warn!(ticker = %ticker, error = %err, "Finviz fetch failed");
                Err(FetchError::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::tests::{KO_PAGE, NOT_FOUND_PAGE};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, header_exists, method, path, query_param},
    };

    fn client_for(server: &MockServer) -> FinvizClient {
        let config = FinvizConfig::default().with_base_url(format!("{}/quote.ashx", server.uri()));
        FinvizClient::new(config).unwrap()
    }

    fn ticker(symbol: &str) -> Ticker {
        Ticker::parse(symbol).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = FinvizConfig::default();
        assert_eq!(config.base_url, FINVIZ_QUOTE_URL);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_url() {
        let client = FinvizClient::new(FinvizConfig::default()).unwrap();
        assert_eq!(
            client.url(&ticker("brk.b")),
            "https://finviz.com/quote.ashx?t=BRK.B"
        );
    }

    #[tokio::test]
    async fn test_fetch_metrics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote.ashx"))
            .and(query_param("t", "KO"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string(KO_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let metrics = client.fetch(&ticker("KO")).await.unwrap();

        assert_eq!(metrics.company_name, "Coca-Cola Co");
        assert_eq!(metrics.pe_ratio, Some(23.2));
        assert_eq!(metrics.profit_margin_pct, Some(23.4));
    }

    #[tokio::test]
    async fn test_custom_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "warren-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(KO_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let config = FinvizConfig::default()
            .with_base_url(format!("{}/quote.ashx", server.uri()))
            .with_user_agent("warren-test/1.0");
        let client = FinvizClient::new(config).unwrap();
        assert!(client.fetch(&ticker("KO")).await.is_ok());
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NOT_FOUND_PAGE))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch(&ticker("ZZZZ")).await.unwrap_err();
        assert_eq!(err, FetchError::NotFound("ZZZZ".to_string()));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_http_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch(&ticker("ZZZZ")).await.unwrap_err();
        assert_eq!(err, FetchError::NotFound("ZZZZ".to_string()));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.snapshot(&ticker("KO")).await.unwrap_err();
        assert!(matches!(err, FinvizError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn test_server_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch(&ticker("KO")).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_fetch_symbol_rejects_invalid_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(KO_PAGE))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch_symbol("not a ticker!").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidTicker(_)));
    }
}
