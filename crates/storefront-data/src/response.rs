//! Catalog response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use storefront_commerce::catalog::Product;

/// Longest error body echoed back in [`FetchError::HttpError`].
const MAX_ERROR_BODY: usize = 200;

/// Status and body captured from the transport.
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl CatalogResponse {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let mut message = self
            .text()
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        if message.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| message.is_char_boundary(i))
                .unwrap_or(0);
            message.truncate(cut);
            message.push_str("...");
        }
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }

    /// Check the status and decode the body as a JSON array of products.
    pub fn into_products(self) -> Result<Vec<Product>, FetchError> {
        self.error_for_status()?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> CatalogResponse {
        CatalogResponse::new(status, body.to_vec())
    }

    const CATALOG: &[u8] = br#"[
        {"id": 1, "title": "Backpack", "price": 109.95, "description": "",
         "category": "men's clothing", "image": "https://fakestoreapi.com/img/1.jpg",
         "rating": {"rate": 3.9, "count": 120}},
        {"id": 5, "title": "Bracelet", "price": 695, "description": "",
         "category": "jewelery", "image": "https://fakestoreapi.com/img/5.jpg",
         "rating": {"rate": 4.6, "count": 400}}
    ]"#;

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_into_products() {
        let products = make_response(200, CATALOG).into_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Backpack");
        assert_eq!(products[1].price.amount_cents, 69500);
    }

    #[test]
    fn test_empty_catalog() {
        let products = make_response(200, b"[]").into_products().unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_non_array_body_is_parse_error() {
        let result = make_response(200, br#"{"id": 1}"#).into_products();
        assert!(matches!(result, Err(FetchError::ParseError(_))));

        let result = make_response(200, b"<html>").into_products();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_negative_price_is_parse_error() {
        let body = br#"[{"id": 1, "title": "x", "price": -3, "image": "", "category": "jewelery"}]"#;
        let result = make_response(200, body).into_products();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_error_status_carries_body() {
        let result = make_response(503, b"Service Unavailable\n").into_products();
        match result {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_status_empty_body() {
        let err = make_response(500, b"").error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Unknown error");
    }

    #[test]
    fn test_long_error_body_is_truncated() {
        let body = "x".repeat(1000);
        match make_response(502, body.as_bytes()).error_for_status() {
            Err(FetchError::HttpError { message, .. }) => {
                assert_eq!(message.len(), MAX_ERROR_BODY + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }
}
