//! Firestore REST implementation of the project store.
//!
//! # Responsibility
//! - Issue one `documents:runQuery` request filtered on `isPublished == true`.
//! - Decode Firestore typed values into plain JSON and then into records.
//!
//! # Invariants
//! - The API key is sent as a query parameter and never logged; transport
//!   errors are stripped of their URL before they are surfaced.
//! - Any transport, status or body failure fails the whole fetch.

use crate::config::FirestoreConfig;
use crate::model::project::{parse_timestamp_millis, ProjectRecord};
use crate::repo::project_repo::{ProjectStore, RepoError, RepoResult};
use log::{error, info};
use serde_json::{json, Map, Number, Value};
use std::time::{Duration, Instant};

const FIRESTORE_BACKEND: &str = "firestore";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const PUBLISHED_FIELD: &str = "isPublished";

/// Firestore-backed project store.
pub struct FirestoreProjectStore {
    config: FirestoreConfig,
    http_client: reqwest::blocking::Client,
}

impl FirestoreProjectStore {
    /// Builds a store handle from validated configuration.
    ///
    /// # Errors
    /// - `RepoError::Config` when the configuration is invalid.
    /// - `RepoError::StoreUnavailable` when the HTTP client cannot be built.
    pub fn new(config: FirestoreConfig) -> RepoResult<Self> {
        config.validate()?;

        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| RepoError::unavailable(FIRESTORE_BACKEND, err.without_url()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    fn run_query(&self) -> RepoResult<Vec<ProjectRecord>> {
        let mut request = self
            .http_client
            .post(self.config.run_query_url())
            .json(&published_query(&self.config.collection));
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.query(&[("key", api_key)]);
        }

        let response = request
            .send()
            .map_err(|err| RepoError::unavailable(FIRESTORE_BACKEND, err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoError::unavailable(
                FIRESTORE_BACKEND,
                format!("runQuery returned HTTP {}", status.as_u16()),
            ));
        }

        let body: Value = response
            .json()
            .map_err(|err| RepoError::unavailable(FIRESTORE_BACKEND, err.without_url()))?;
        decode_run_query_response(&body)
    }
}

impl ProjectStore for FirestoreProjectStore {
    fn backend_name(&self) -> &'static str {
        FIRESTORE_BACKEND
    }

    fn fetch_published_projects(&self) -> RepoResult<Vec<ProjectRecord>> {
        let started_at = Instant::now();
        info!(
            "event=store_fetch module=repo backend={} status=start collection={}",
            FIRESTORE_BACKEND, self.config.collection
        );

        let result = self.run_query();
        match &result {
            Ok(records) => info!(
                "event=store_fetch module=repo backend={} status=ok count={} duration_ms={}",
                FIRESTORE_BACKEND,
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_fetch module=repo backend={} status=error duration_ms={} error={}",
                FIRESTORE_BACKEND,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }
}

/// Structured query body selecting published documents.
pub fn published_query(collection: &str) -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": PUBLISHED_FIELD },
                    "op": "EQUAL",
                    "value": { "booleanValue": true }
                }
            }
        }
    })
}

/// Decodes a `runQuery` response array into records.
///
/// Entries without a `document` (read-time markers) are skipped. An `error`
/// entry means the result stream aborted and fails the whole fetch.
pub fn decode_run_query_response(body: &Value) -> RepoResult<Vec<ProjectRecord>> {
    let entries = body.as_array().ok_or_else(|| {
        RepoError::unavailable(FIRESTORE_BACKEND, "runQuery response is not an array")
    })?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(stream_error) = entry.get("error") {
            return Err(RepoError::unavailable(
                FIRESTORE_BACKEND,
                stream_error_summary(stream_error),
            ));
        }
        if let Some(document) = entry.get("document") {
            records.push(decode_document(document)?);
        }
    }
    Ok(records)
}

/// Code and status of an in-stream error; the message text is not kept.
fn stream_error_summary(stream_error: &Value) -> String {
    let code = stream_error
        .get("code")
        .and_then(Value::as_i64)
        .map_or_else(|| "unknown".to_string(), |code| code.to_string());
    let status = stream_error
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN");
    format!("runQuery stream aborted with code={code} status={status}")
}

/// Decodes one Firestore document resource.
pub fn decode_document(document: &Value) -> RepoResult<ProjectRecord> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| RepoError::unavailable(FIRESTORE_BACKEND, "document without name"))?;
    let id = document_id(name);
    let fields = decode_fields(document.get("fields"));

    let mut record = ProjectRecord::from_document(id, &fields);
    if record.created_at.is_none() {
        record.created_at = document.get("createTime").and_then(parse_timestamp_millis);
    }
    Ok(record)
}

/// Last path segment of `projects/{p}/databases/{d}/documents/{collection}/{id}`.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Decodes a Firestore `fields` map into plain JSON.
pub fn decode_fields(fields: Option<&Value>) -> Map<String, Value> {
    match fields.and_then(Value::as_object) {
        Some(fields) => fields
            .iter()
            .map(|(key, value)| (key.clone(), decode_value(value)))
            .collect(),
        None => Map::new(),
    }
}

/// Decodes one Firestore typed value.
///
/// Unknown or malformed values decode to `null` so record decoding can
/// fall back to defaults.
pub fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|object| object.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => inner.as_bool().map_or(Value::Null, Value::Bool),
        "integerValue" => match inner {
            Value::String(text) => text.parse::<i64>().map_or(Value::Null, Value::from),
            Value::Number(number) => number.as_i64().map_or(Value::Null, Value::from),
            _ => Value::Null,
        },
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map_or(Value::Null, |text| Value::String(text.to_string())),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(decode_fields(inner.get("fields"))),
        "geoPointValue" => inner.clone(),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_run_query_response, decode_value, document_id, published_query};
    use serde_json::json;

    #[test]
    fn decode_value_handles_scalar_kinds() {
        assert_eq!(decode_value(&json!({"stringValue": "a"})), json!("a"));
        assert_eq!(decode_value(&json!({"booleanValue": true})), json!(true));
        assert_eq!(decode_value(&json!({"integerValue": "42"})), json!(42));
        assert_eq!(decode_value(&json!({"doubleValue": 1.5})), json!(1.5));
        assert_eq!(decode_value(&json!({"nullValue": null})), json!(null));
        assert_eq!(
            decode_value(&json!({"timestampValue": "2024-11-01T09:00:00Z"})),
            json!("2024-11-01T09:00:00Z")
        );
    }

    #[test]
    fn decode_value_handles_nested_containers() {
        let decoded = decode_value(&json!({
            "mapValue": {"fields": {
                "tags": {"arrayValue": {"values": [
                    {"stringValue": "Rust"},
                    {"integerValue": "7"}
                ]}},
                "empty": {"arrayValue": {}}
            }}
        }));
        assert_eq!(decoded, json!({"tags": ["Rust", 7], "empty": []}));
    }

    #[test]
    fn decode_value_maps_garbage_to_null() {
        assert_eq!(decode_value(&json!("raw")), json!(null));
        assert_eq!(decode_value(&json!({})), json!(null));
        assert_eq!(decode_value(&json!({"integerValue": "x"})), json!(null));
        assert_eq!(decode_value(&json!({"futureValue": 1})), json!(null));
    }

    #[test]
    fn error_entry_after_documents_is_not_a_partial_success() {
        let body = json!([
            {"document": {"name": "p/d/documents/projects/a", "fields": {}}},
            {"error": {"code": 503, "status": "UNAVAILABLE"}}
        ]);
        let err = decode_run_query_response(&body).unwrap_err();
        assert!(err.is_store_unavailable());

        let ok = json!([{"readTime": "2024-11-02T00:00:00Z"}]);
        assert!(decode_run_query_response(&ok).unwrap().is_empty());
    }

    #[test]
    fn document_id_is_last_segment() {
        assert_eq!(
            document_id("projects/site/databases/(default)/documents/projects/abc123"),
            "abc123"
        );
        assert_eq!(document_id("plain"), "plain");
    }

    #[test]
    fn published_query_filters_on_flag() {
        let query = published_query("projects");
        assert_eq!(
            query["structuredQuery"]["where"]["fieldFilter"]["field"]["fieldPath"],
            json!("isPublished")
        );
        assert_eq!(
            query["structuredQuery"]["from"][0]["collectionId"],
            json!("projects")
        );
    }
}
