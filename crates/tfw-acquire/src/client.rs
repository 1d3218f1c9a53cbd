use crate::error::WeatherError;
use crate::extract::parse_report;
use std::time::Duration;
use tfw_model::{WeatherQuery, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "http://www.thefuckingweather.com/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How to reach the weather site.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Endpoint the query string is appended to.
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("tfw/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A single-request client for the weather site.
///
/// Holds no state between calls beyond the connection pool, so one client
/// can serve any number of independent lookups.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: FetchConfig) -> Result<Self, WeatherError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Fetch the page for `query` and extract a report from it.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let html = self.fetch_page(query).await?;
        parse_report(&html, query.unit())
    }

    /// Fetch the raw HTML for `query`. Any non-2xx status is an error.
    pub async fn fetch_page(&self, query: &WeatherQuery) -> Result<String, WeatherError> {
        let pairs = query.query_pairs();
        let request = self.http.get(&self.base_url).query(&pairs).build()?;
        tracing::info!(url = %request.url(), "Fetching weather page");

        let response = self.http.execute(request).await?.error_for_status()?;
        let html = response.text().await?;
        tracing::info!(bytes = html.len(), "Received HTML");

        Ok(html)
    }
}

/// Fetch and extract a report using the default configuration.
pub async fn fetch_weather(query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
    WeatherClient::new(FetchConfig::default())?.fetch(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("tfw/"));
    }

    #[test]
    fn test_request_url_carries_query() {
        let client = WeatherClient::new(FetchConfig::default()).unwrap();
        let query = WeatherQuery::at("New York, NY").celsius(true);
        let request = client
            .http
            .get(&client.base_url)
            .query(&query.query_pairs())
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://www.thefuckingweather.com/?where=New+York%2C+NY&unit=c"
        );
    }
}
