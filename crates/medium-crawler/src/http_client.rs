use crate::error::CrawlError;
use medium_markdown::{ConvertError, Fetch};
use reqwest::blocking::{Client as ReqwestClient, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub verify_tls: bool,
    /// Sent with every request. A later entry replaces an earlier one with
    /// the same name.
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            verify_tls: true,
            headers: vec![("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())],
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Parses a `Name: Value` header argument.
pub fn parse_header(header: &str) -> Result<(String, String), CrawlError> {
    let invalid = |message: &str| CrawlError::InvalidHeader {
        header: header.to_string(),
        message: message.to_string(),
    };
    let (name, value) = header.split_once(':').ok_or_else(|| invalid("missing ':'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("empty header name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Blocking HTTP client shared by the page fetch and the image downloads.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(&ClientOptions::default()).expect("Failed to build default reqwest client")
    }
}

impl HttpClient {
    pub fn new(options: &ClientOptions) -> Result<Self, CrawlError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let invalid = |e: &dyn std::fmt::Display| CrawlError::InvalidHeader {
                header: format!("{}: {}", name, value),
                message: e.to_string(),
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(&e))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(&e))?;
            headers.insert(header_name, header_value);
        }

        if !options.verify_tls {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!options.verify_tls)
            .timeout(options.timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CrawlError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response, ConvertError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ConvertError::network(url, e))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ConvertError::network(
                url,
                format!("Request failed with status: {}", response.status()),
            ))
        }
    }

    /// Fetches a page as text. Any failure here aborts the conversion.
    pub fn fetch_text(&self, url: &str) -> Result<String, ConvertError> {
        tracing::info!("Fetching {}", url);
        self.get(url)?
            .text()
            .map_err(|e| ConvertError::network(url, format!("Failed to read response text: {}", e)))
    }

    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ConvertError> {
        tracing::debug!("Downloading {}", url);
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| ConvertError::network(url, format!("Failed to read response body: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ConvertError> {
        self.fetch_bytes(url)
    }
}
