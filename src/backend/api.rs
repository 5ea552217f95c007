//! HTTP client for the APOD API

use reqwest::{Client, Url};
use serde_json::Value;

use crate::backend::types::{Fetched, Record};
use crate::config::Config;
use crate::error::FetchError;
use crate::gallery::date_range::DateRange;

const APOD_PATH: &str = "/planetary/apod";

/// Anything that can produce the batch of records for one load
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch_records(&self) -> Result<Fetched, FetchError>;
}

/// Client for the NASA APOD endpoint
#[derive(Debug, Clone)]
pub struct ApodClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Full request URL for the given window, query values percent-encoded
    pub fn records_url(&self, range: &DateRange) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &format!("{}{}", self.base_url, APOD_PATH),
            [
                ("api_key", self.api_key.as_str()),
                ("start_date", range.start_date.as_str()),
                ("end_date", range.end_date.as_str()),
            ],
        )
        .map_err(|e| FetchError::Url(e.to_string()))
    }

    /// Fetch the records for an explicit window
    pub async fn fetch_range(&self, range: &DateRange) -> Result<Fetched, FetchError> {
        tracing::debug!(
            "GET {}{} start_date={} end_date={}",
            self.base_url,
            APOD_PATH,
            range.start_date,
            range.end_date
        );

        let url = self.records_url(range)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_payload(&body)
    }

    /// Fetch the window ending today
    pub async fn fetch_current(&self) -> Result<Fetched, FetchError> {
        let result = self.fetch_range(&DateRange::current()).await;
        match &result {
            Ok(fetched) => tracing::info!("Fetched {} APOD record(s)", fetched.len()),
            Err(e) => tracing::error!("Error fetching planets: {}", e),
        }
        result
    }
}

impl RecordSource for ApodClient {
    async fn fetch_records(&self) -> Result<Fetched, FetchError> {
        self.fetch_current().await
    }
}

/// Turn a successful response body into records, newest first for lists
pub fn decode_payload(body: &[u8]) -> Result<Fetched, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(message) = api_error(&value) {
        return Err(FetchError::Api(message));
    }

    match value {
        Value::Array(_) => {
            let records: Vec<Record> =
                serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(Fetched::Many(sort_newest_first(records)))
        }
        Value::Object(_) => {
            let record: Record =
                serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(Fetched::Single(record))
        }
        other => Err(FetchError::Decode(format!("expected an array or object, got {}", other))),
    }
}

/// Message of a truthy top-level `error` field, if there is one
fn api_error(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(fields) => Some(
            fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// Stable sort by date, newest first; undated entries go last
pub fn sort_newest_first(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.day().cmp(&a.day()));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn client(base_url: &str, api_key: &str) -> ApodClient {
        ApodClient::new(&Config {
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn window() -> DateRange {
        DateRange {
            start_date: "2024-02-24".into(),
            end_date: "2024-03-15".into(),
        }
    }

    /// Answer exactly one request with a canned response; the task yields the
    /// request head it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });

        (base_url, handle)
    }

    fn record(date: &str, title: &str) -> Record {
        Record {
            date: date.to_string(),
            title: title.to_string(),
            explanation: String::new(),
            url: None,
            media_type: "image".to_string(),
            copyright: None,
            msg: None,
        }
    }

    #[test]
    fn builds_query_url() {
        let url = client("https://api.nasa.gov", "KEY").records_url(&window()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/planetary/apod?api_key=KEY&start_date=2024-02-24&end_date=2024-03-15"
        );
    }

    #[test]
    fn api_key_is_percent_encoded() {
        let url = client("https://api.nasa.gov", "a&b c#d").records_url(&window()).unwrap();
        assert!(url.as_str().contains("api_key=a%26b+c%23d&start_date="));
        assert_eq!(url.fragment(), None);

        let key = url.query_pairs().find(|(k, _)| k == "api_key").map(|(_, v)| v.into_owned());
        assert_eq!(key.as_deref(), Some("a&b c#d"));
    }

    #[test]
    fn unparseable_base_url_is_reported() {
        let err = client("not a url", "KEY").records_url(&window()).unwrap_err();
        assert!(matches!(err, FetchError::Url(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let (base_url, server) = serve_once("429 Too Many Requests", r#"{"error": "slow down"}"#).await;
        let err = client(&base_url, "KEY").fetch_range(&window()).await.unwrap_err();
        assert_eq!(err, FetchError::HttpStatus { status: 429 });

        let head = server.await.unwrap();
        assert!(head.starts_with(
            "GET /planetary/apod?api_key=KEY&start_date=2024-02-24&end_date=2024-03-15 HTTP/1.1"
        ));
    }

    #[tokio::test]
    async fn served_list_comes_back_sorted() {
        let body = r#"[
            {"date": "2024-03-01", "title": "older", "media_type": "image"},
            {"date": "2024-03-10", "title": "newer", "media_type": "image"}
        ]"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let fetched = client(&base_url, "KEY").fetch_range(&window()).await.unwrap();
        server.await.unwrap();

        match fetched {
            Fetched::Many(records) => {
                let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles, ["newer", "older"]);
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn served_key_is_sent_encoded() {
        let (base_url, server) = serve_once("200 OK", "[]").await;
        let fetched = client(&base_url, "a&b c").fetch_range(&window()).await.unwrap();
        assert!(fetched.is_empty());

        let head = server.await.unwrap();
        assert!(head.contains("api_key=a%26b+c&start_date=2024-02-24"));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error_without_key() {
        // Bind then drop to get a local port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base_url, "SECRETKEY123").fetch_range(&window()).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.to_string().contains("SECRETKEY123"));
        assert!(!format!("{:?}", err).contains("SECRETKEY123"));
    }

    #[test]
    fn list_is_sorted_newest_first() {
        let body = br#"[
            {"date": "2024-03-01", "title": "a", "media_type": "image"},
            {"date": "2024-03-10", "title": "b", "media_type": "image"}
        ]"#;
        match decode_payload(body).unwrap() {
            Fetched::Many(records) => {
                let dates: Vec<_> = records.iter().map(|r| r.date.as_str()).collect();
                assert_eq!(dates, ["2024-03-10", "2024-03-01"]);
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn sort_is_stable_and_monotonic() {
        let sorted = sort_newest_first(vec![
            record("2024-03-02", "first"),
            record("2024-03-05", "x"),
            record("2024-03-02", "second"),
            record("not a date", "undated"),
            record("2024-03-02", "third"),
        ]);
        let titles: Vec<_> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["x", "first", "second", "third", "undated"]);

        let days: Vec<_> = sorted.iter().filter_map(Record::day).collect();
        assert!(days.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn error_string_is_api_error() {
        let err = decode_payload(br#"{"error": "over rate limit"}"#).unwrap_err();
        assert_eq!(err, FetchError::Api("over rate limit".into()));
    }

    #[test]
    fn nested_error_uses_message() {
        let body = br#"{"error": {"code": "OVER_RATE_LIMIT", "message": "You have exceeded your rate limit."}}"#;
        let err = decode_payload(body).unwrap_err();
        assert_eq!(err, FetchError::Api("You have exceeded your rate limit.".into()));
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        let fetched = decode_payload(br#"{"error": null, "date": "2024-03-15", "title": "t"}"#).unwrap();
        assert!(matches!(fetched, Fetched::Single(ref r) if r.title == "t"));
    }

    #[test]
    fn single_object_is_returned_unchanged() {
        let body = br#"{"date": "2024-03-15", "title": "Solo", "media_type": "image", "url": "a.jpg"}"#;
        match decode_payload(body).unwrap() {
            Fetched::Single(r) => {
                assert_eq!(r.title, "Solo");
                assert_eq!(r.url.as_deref(), Some("a.jpg"));
            }
            other => panic!("Expected single record, got {:?}", other),
        }
    }

    #[test]
    fn non_json_and_scalars_are_decode_errors() {
        assert!(matches!(decode_payload(b"<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(decode_payload(b"42"), Err(FetchError::Decode(_))));
    }
}
