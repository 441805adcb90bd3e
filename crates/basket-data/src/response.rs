//! Buffered HTTP responses.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
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
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Stock {
        id: u64,
        amount: i64,
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, vec![]).is_success());
        assert!(Response::new(204, vec![]).is_success());
        assert!(!Response::new(304, vec![]).is_success());
        assert!(!Response::new(404, vec![]).is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = Response::new(200, br#"{"id": 1, "amount": 5}"#.to_vec());
        assert_eq!(resp.json::<Stock>().unwrap(), Stock { id: 1, amount: 5 });
    }

    #[test]
    fn test_response_json_malformed() {
        let resp = Response::new(200, br#"{"id": "one"}"#.to_vec());
        assert!(matches!(
            resp.json::<Stock>(),
            Err(FetchError::ParseError(_))
        ));
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        assert!(Response::new(200, vec![0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn test_error_for_status_carries_body() {
        let err = Response::new(404, b"Not Found".to_vec())
            .error_for_status()
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
