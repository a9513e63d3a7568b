use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::entity::Entity;
use super::gateway_traits::EntityGatewayTrait;
use crate::constants::{CREATED_AT_FIELD, UPDATED_AT_FIELD};
use crate::documents::{DocumentStoreTrait, DocumentWrite};
use crate::errors::Result;

/// Gateway for one entity kind over a generic document store.
pub struct CollectionGateway<E> {
    store: Arc<dyn DocumentStoreTrait>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> CollectionGateway<E> {
    pub fn new(store: Arc<dyn DocumentStoreTrait>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> EntityGatewayTrait<E> for CollectionGateway<E> {
    async fn get_all(&self) -> Result<Vec<E>> {
        let collection = E::KIND.collection();
        let documents = self
            .store
            .list_documents(collection, Some(&E::default_order()))
            .await?;
        debug!("Loaded {} documents from {}", documents.len(), collection);
        documents.into_iter().map(|d| d.into_record()).collect()
    }

    async fn add(&self, new: E::New) -> Result<E> {
        let write = DocumentWrite::from_record(&new)?
            .with_server_timestamp(CREATED_AT_FIELD)
            .with_server_timestamp(UPDATED_AT_FIELD);
        let id = self.store.add_document(E::KIND.collection(), write).await?;
        debug!("Created {} {}", E::KIND, id);
        Ok(E::from_new(id, new))
    }

    async fn update(&self, id: &str, update: E::Update) -> Result<()> {
        let write = DocumentWrite::from_record(&update)?.with_server_timestamp(UPDATED_AT_FIELD);
        self.store
            .update_document(E::KIND.collection(), id, write)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_document(E::KIND.collection(), id).await
    }
}
