//! In-memory document store.
//!
//! Used by tests and by callers that want a throwaway store. Collections keep
//! insertion order; identifiers are random UUIDs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::documents_model::{merge_fields, sort_documents, Document, DocumentWrite, OrderBy};
use super::documents_traits::DocumentStoreTrait;
use crate::errors::{Result, StoreError};

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in a collection.
    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStoreTrait for InMemoryDocumentStore {
    async fn list_documents(
        &self,
        collection: &str,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>> {
        let mut documents = self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default();
        if let Some(order) = order {
            sort_documents(&mut documents, order);
        }
        Ok(documents)
    }

    async fn add_document(&self, collection: &str, write: DocumentWrite) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let fields = write.resolve(Utc::now());
        debug!("Adding document {}/{}", collection, id);
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        write: DocumentWrite,
    ) -> Result<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;
        merge_fields(&mut document.fields, write.resolve(Utc::now()));
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        if let Some(documents) = self.collections.write().await.get_mut(collection) {
            documents.retain(|d| d.id != id);
        }
        Ok(())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn set_document(&self, collection: &str, id: &str, write: DocumentWrite) -> Result<()> {
        let fields = write.resolve(Utc::now());
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();
        match documents.iter_mut().find(|d| d.id == id) {
            Some(existing) => merge_fields(&mut existing.fields, fields),
            None => documents.push(Document::new(id, fields)),
        }
        Ok(())
    }
}
