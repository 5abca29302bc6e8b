//! Row Records
//!
//! A row is a caller-owned JSON object with a unique `id`. The table reads
//! fields by column key and never mutates them.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One data item displayed as a table row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RowRecord {
    id: String,
    fields: Map<String, Value>,
}

impl RowRecord {
    /// Create a row from an id and its fields
    ///
    /// The id is also stored under the `id` field so it can back a column.
    pub fn new(id: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        let id = id.into();
        // The "id" field always names the same row as `id`; a numeric field
        // that stringifies to it is kept as is.
        let consistent = match fields.get("id") {
            Some(Value::String(existing)) => *existing == id,
            Some(Value::Number(existing)) => existing.to_string() == id,
            _ => false,
        };
        if !consistent {
            fields.insert("id".into(), Value::String(id.clone()));
        }
        Self { id, fields }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Field value for a column key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Value> for RowRecord {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(Error::Invalid {
                message: "row record must be a JSON object".to_string(),
            });
        };

        let id = match fields.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(Error::Invalid {
                    message: "row record needs a string or numeric `id`".to_string(),
                });
            }
        };

        Ok(Self { id, fields })
    }
}

/// Parse a JSON array of row records
pub fn rows_from_json(json: &str) -> Result<Vec<RowRecord>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values.into_iter().map(RowRecord::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_id_is_stringified() {
        let row = RowRecord::try_from(json!({"id": 7, "name": "Ada"})).expect("row");
        assert_eq!(row.id(), "7");
        assert_eq!(row.get("id"), Some(&json!(7)));
        assert_eq!(row.get("name"), Some(&json!("Ada")));
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(RowRecord::try_from(json!({"name": "Ada"})).is_err());
        assert!(RowRecord::try_from(json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn new_exposes_id_as_field() {
        let row = RowRecord::new("r1", Map::new());
        assert_eq!(row.get("id"), Some(&json!("r1")));
    }

    #[test]
    fn new_replaces_conflicting_id_field() {
        let mut fields = Map::new();
        fields.insert("id".into(), json!("other"));
        let row = RowRecord::new("r1", fields);
        assert_eq!(row.id(), "r1");
        assert_eq!(row.get("id"), Some(&json!("r1")));

        let mut fields = Map::new();
        fields.insert("id".into(), json!(3));
        assert_eq!(RowRecord::new("4", fields).get("id"), Some(&json!("4")));
    }

    #[test]
    fn parses_array_of_rows() {
        let rows = rows_from_json(r#"[{"id": "a"}, {"id": 2, "v": null}]"#).expect("rows");
        let ids: Vec<_> = rows.iter().map(RowRecord::id).collect();
        assert_eq!(ids, vec!["a", "2"]);
    }
}
