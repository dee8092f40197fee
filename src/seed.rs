//! Bulk loading of business payloads through the HTTP API.

use crate::api_client::BusinessClient;
use crate::errors::ClientError;
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_SEED_FILE: &str = "data/sample_data.json";

/// Outcome of posting one payload.
#[derive(Debug)]
pub struct SeedOutcome {
    /// Display name taken from the payload, if it had one.
    pub name: String,
    pub result: Result<u64, ClientError>,
}

/// Per-item results of a seeding run, in input order.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.created()
    }

    pub fn created_ids(&self) -> Vec<u64> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().copied())
            .collect()
    }
}

/// Reads a JSON array of business payloads.
pub fn load_seed_file(path: &Path) -> Result<Vec<Value>, ClientError> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| ClientError::InvalidPayload(format!("{}: {}", path.display(), e)))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ClientError::InvalidPayload(format!(
            "{}: expected a JSON array of businesses",
            path.display()
        ))),
    }
}

fn payload_name(payload: &Value) -> String {
    payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
        .to_string()
}

/// Posts each payload in order. A failed item is recorded in the report; it
/// does not stop the remaining items. Reporting is left to the caller.
pub async fn seed_businesses(client: &BusinessClient, payloads: &[Value]) -> SeedReport {
    let mut report = SeedReport::default();

    for payload in payloads {
        let name = payload_name(payload);
        let result = client.create(payload).await.map(|business| business.id);
        report.outcomes.push(SeedOutcome { name, result });
    }

    tracing::debug!(
        "Seeded {} of {} businesses",
        report.created(),
        payloads.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "A"}}, {{"name": "B", "category": "Cafe"}}]"#).unwrap();

        let items = load_seed_file(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(payload_name(&items[1]), "B");
    }

    #[test]
    fn test_load_seed_file_rejects_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "A"}}"#).unwrap();

        let result = load_seed_file(file.path());
        assert!(matches!(result, Err(ClientError::InvalidPayload(_))));
    }

    #[test]
    fn test_report_counts() {
        let report = SeedReport {
            outcomes: vec![
                SeedOutcome {
                    name: "A".to_string(),
                    result: Ok(1),
                },
                SeedOutcome {
                    name: "B".to_string(),
                    result: Err(ClientError::Http {
                        status: 422,
                        message: "name cannot be empty".to_string(),
                    }),
                },
            ],
        };
        assert_eq!(report.created(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.created_ids(), vec![1]);
    }
}
