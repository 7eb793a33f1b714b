//! JSON protocol configuration reader

use async_trait::async_trait;
use launcher_application::{ConfigError, ProtocolConfigReader, SCALE_FIELD};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Reads the scale parameter from a JSON protocol configuration file
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProtocolConfigReader;

impl JsonProtocolConfigReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProtocolConfigReader for JsonProtocolConfigReader {
    async fn read_scale(&self, path: &Path) -> Result<u64, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let document: Value = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let scale = scale_from_value(&document)?;
        debug!("Read {} = {} from '{}'", SCALE_FIELD, scale, path.display());
        Ok(scale)
    }
}

/// Extract the scale parameter from a parsed configuration document.
///
/// The field must be a non-negative JSON integer. Floats (including
/// `2.0`), strings and negative numbers are rejected.
pub fn scale_from_value(document: &Value) -> Result<u64, ConfigError> {
    let field = document
        .get(SCALE_FIELD)
        .ok_or(ConfigError::MissingField { field: SCALE_FIELD })?;

    if let Some(scale) = field.as_u64() {
        return Ok(scale);
    }

    match field.as_i64() {
        Some(negative) => Err(ConfigError::Negative {
            field: SCALE_FIELD,
            value: negative,
        }),
        None => Err(ConfigError::NotAnInteger {
            field: SCALE_FIELD,
            value: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_scale_from_integer() {
        assert_eq!(scale_from_value(&json!({"l": 2})).unwrap(), 2);
        assert_eq!(scale_from_value(&json!({"l": 0})).unwrap(), 0);
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let doc = json!({"l": 1, "depth": 8, "hosts": ["127.0.0.1:9000"]});
        assert_eq!(scale_from_value(&doc).unwrap(), 1);
    }

    #[test]
    fn test_missing_field() {
        assert!(matches!(
            scale_from_value(&json!({"depth": 8})),
            Err(ConfigError::MissingField { field: "l" })
        ));
        assert!(matches!(
            scale_from_value(&json!([1, 2, 3])),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            scale_from_value(&json!({"l": -1})),
            Err(ConfigError::Negative { value: -1, .. })
        ));
    }

    #[test]
    fn test_non_integers_rejected() {
        for doc in [json!({"l": 1.5}), json!({"l": 2.0}), json!({"l": "2"}), json!({"l": null})] {
            assert!(
                matches!(scale_from_value(&doc), Err(ConfigError::NotAnInteger { .. })),
                "accepted {doc}"
            );
        }
    }

    #[tokio::test]
    async fn test_read_scale_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "l": 4, "n": 16 }"#).unwrap();

        let scale = JsonProtocolConfigReader::new().read_scale(&path).await.unwrap();

        assert_eq!(scale, 4);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ l: 4 ").unwrap();

        let err = JsonProtocolConfigReader::new()
            .read_scale(&path)
            .await
            .unwrap_err();

        match err {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonProtocolConfigReader::new()
            .read_scale(&dir.path().join("missing.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
