//! Where the catalog comes from.

use async_trait::async_trait;
use storefront_commerce::catalog::Product;
use tracing::debug;

use crate::{CatalogResponse, FetchError};

/// Default product listing endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// A provider of the product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product list once.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Fetches the product list with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    /// Create a source for an absolute `http(s)` endpoint.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a source reusing an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Result<Self, FetchError> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(url));
        }
        Ok(Self { client, url })
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        debug!(url = %self.url, "GET product listing");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "product listing received");

        CatalogResponse::new(status, body).into_products()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_urls() {
        let source = HttpProductSource::new(DEFAULT_PRODUCTS_URL).unwrap();
        assert_eq!(source.url(), DEFAULT_PRODUCTS_URL);
        assert_eq!(source.describe(), DEFAULT_PRODUCTS_URL);
        assert!(HttpProductSource::new("http://localhost:8080/products").is_ok());
    }

    #[test]
    fn test_rejects_relative_urls() {
        let result = HttpProductSource::new("/products");
        assert!(matches!(result, Err(FetchError::InvalidUrl(url)) if url == "/products"));

        assert!(HttpProductSource::new("ftp://example.com/products").is_err());
    }
}
