//! Database models for documents.

use diesel::prelude::*;
use fintrack_core::documents::{Document, FieldMap};
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

/// Database model for one stored document.
///
/// `fields` holds the JSON object body; `position` records insertion order
/// within the collection.
#[derive(
    Queryable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DocumentDB {
    pub collection: String,
    pub id: String,
    pub fields: String,
    pub position: i64,
}

impl DocumentDB {
    pub fn new(
        collection: &str,
        id: &str,
        fields: &FieldMap,
        position: i64,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            collection: collection.to_string(),
            id: id.to_string(),
            fields: serde_json::to_string(fields)?,
            position,
        })
    }

    pub fn field_map(&self) -> Result<FieldMap, StorageError> {
        Ok(serde_json::from_str(&self.fields)?)
    }
}

// Conversion to domain models
impl TryFrom<DocumentDB> for Document {
    type Error = StorageError;

    fn try_from(db: DocumentDB) -> Result<Self, Self::Error> {
        let fields = db.field_map()?;
        Ok(Document::new(db.id, fields))
    }
}
