//! Document store models.

use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::constants::ID_FIELD;
use crate::errors::{Error, Result};

/// Untyped document body.
pub type FieldMap = Map<String, Value>;

/// A stored document: identifier plus fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: FieldMap,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Converts the document into a typed record, injecting the identifier.
    ///
    /// Fields the record does not declare (such as store timestamps) are
    /// dropped by deserialization.
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T> {
        let mut fields = self.fields;
        fields.insert(ID_FIELD.to_string(), Value::String(self.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Parses an RFC 3339 timestamp field written by the store.
    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering applied when listing a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

/// A write request: the fields to store plus the fields the store must fill
/// with its own write time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentWrite {
    pub fields: FieldMap,
    pub server_timestamps: Vec<String>,
}

impl DocumentWrite {
    pub fn new(fields: FieldMap) -> Self {
        Self {
            fields,
            server_timestamps: Vec::new(),
        }
    }

    /// Serializes a record into a write. The record must serialize to a JSON
    /// object; an `id` field, if present, is not stored as a field.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        match serde_json::to_value(record)? {
            Value::Object(mut fields) => {
                fields.remove(ID_FIELD);
                Ok(Self::new(fields))
            }
            other => Err(Error::Serialization(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }

    pub fn with_server_timestamp(mut self, field: &str) -> Self {
        if !self.server_timestamps.iter().any(|f| f == field) {
            self.server_timestamps.push(field.to_string());
        }
        self
    }

    /// Produces the final field map, stamping the requested fields with `now`.
    pub fn resolve(self, now: DateTime<Utc>) -> FieldMap {
        let stamp = Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true));
        let mut fields = self.fields;
        for field in self.server_timestamps {
            fields.insert(field, stamp.clone());
        }
        fields
    }
}

/// Deserializes an optional field of a partial update.
///
/// Paired with `#[serde(default)]`: an absent field stays `None` and an
/// explicit null becomes `Some(None)`, which clears the stored value.
pub fn deserialize_nullable<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Shallow merge: every incoming field replaces the target's value.
pub fn merge_fields(target: &mut FieldMap, incoming: FieldMap) {
    for (key, value) in incoming {
        target.insert(key, value);
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Total order over optional field values.
///
/// Missing and null values sort first, then booleans, numbers, strings,
/// arrays and objects. Values of the same type compare naturally; arrays
/// and objects compare equal.
pub fn compare_field_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Stable sort of documents by one field.
pub fn sort_documents(documents: &mut [Document], order: &OrderBy) {
    documents.sort_by(|a, b| {
        let ordering = compare_field_values(a.fields.get(&order.field), b.fields.get(&order.field));
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
