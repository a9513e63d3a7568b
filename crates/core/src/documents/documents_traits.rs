//! Document store trait.
//!
//! This trait is the boundary to the hosted document database. It is
//! untyped; the gateways translate between documents and
//! domain records.

use async_trait::async_trait;

use super::documents_model::{Document, DocumentWrite, OrderBy};
use crate::errors::Result;

/// Contract for a document store holding named collections.
#[async_trait]
pub trait DocumentStoreTrait: Send + Sync {
    /// Lists every document of a collection.
    ///
    /// Without an ordering, documents come back in insertion order. An empty
    /// or unknown collection yields an empty list.
    async fn list_documents(
        &self,
        collection: &str,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>>;

    /// Adds a document under a fresh store-assigned identifier.
    ///
    /// Returns the new identifier.
    async fn add_document(&self, collection: &str, write: DocumentWrite) -> Result<String>;

    /// Merges fields into an existing document.
    ///
    /// Fails with `StoreError::NotFound` if the document does not exist.
    async fn update_document(&self, collection: &str, id: &str, write: DocumentWrite)
        -> Result<()>;

    /// Removes a document. Removing a missing document is a no-op.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<()>;

    /// Reads a single document by identifier.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Creates the document at `id` or merges into it if it already exists.
    async fn set_document(&self, collection: &str, id: &str, write: DocumentWrite) -> Result<()>;
}
