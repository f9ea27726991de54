use axum::http::{HeaderMap, header::CONTENT_TYPE};
use chrono::{Local, NaiveDateTime, Timelike};

use crate::{
    error::AppError::{self, EmptyQuery, MalformedPayload},
    models::SearchRequest,
};

/// Bodies without a content type are still read as JSON, anything else must be a json media type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };

    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json") || essence.ends_with("+json")
}

pub fn parse_query(headers: &HeaderMap, body: &[u8]) -> Result<String, AppError> {
    if !is_json(headers) {
        return Err(MalformedPayload(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    let request: SearchRequest =
        serde_json::from_slice(body).map_err(|e| MalformedPayload(e.to_string()))?;
    let query = request.query.trim();

    if query.is_empty() {
        return Err(EmptyQuery);
    }

    Ok(query.to_string())
}

pub fn timestamp() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Microseconds are left out entirely when they are zero.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{format_timestamp, parse_query, timestamp};
    use crate::error::AppError;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_trims_query() {
        let body = br#"{"query": "  example.com \n"}"#;
        assert_eq!(parse_query(&json_headers(), body).unwrap(), "example.com");
    }

    #[test]
    fn test_empty_query() {
        assert!(matches!(
            parse_query(&json_headers(), br#"{"query": ""}"#),
            Err(AppError::EmptyQuery)
        ));
        assert!(matches!(
            parse_query(&json_headers(), br#"{"query": "   \t"}"#),
            Err(AppError::EmptyQuery)
        ));
    }

    #[test]
    fn test_missing_content_type_is_json() {
        let body = br#"{"query": "test@example.com"}"#;
        assert_eq!(parse_query(&HeaderMap::new(), body).unwrap(), "test@example.com");
    }

    #[test]
    fn test_json_content_type_variants() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(parse_query(&headers, br#"{"query": "a.io"}"#).is_ok());

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/merge+json"));
        assert!(parse_query(&headers, br#"{"query": "a.io"}"#).is_ok());
    }

    #[test]
    fn test_rejects_other_content_types() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        assert!(matches!(
            parse_query(&headers, br#"{"query": "a.io"}"#),
            Err(AppError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            parse_query(&json_headers(), br#"{"q": "a.io"}"#),
            Err(AppError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_query(&json_headers(), b"not json"),
            Err(AppError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_query(&json_headers(), br#"{"query": 42}"#),
            Err(AppError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_timestamp_is_iso() {
        let stamp = timestamp();

        assert!(NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_timestamp_microseconds() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let whole = date.and_hms_opt(8, 5, 1).unwrap();
        assert_eq!(format_timestamp(whole), "2024-03-09T08:05:01");

        let fraction = date.and_hms_micro_opt(8, 5, 1, 42).unwrap();
        assert_eq!(format_timestamp(fraction), "2024-03-09T08:05:01.000042");
    }
}
