use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::gateway_traits::ProfileGatewayTrait;
use crate::constants::{
    CREATED_AT_FIELD, PROFILE_COLLECTION, PROFILE_DOCUMENT_ID, UPDATED_AT_FIELD,
};
use crate::documents::{DocumentStoreTrait, DocumentWrite};
use crate::errors::Result;
use crate::profile::{ProfileUpdate, UserProfile};

/// Gateway for the user profile, kept at a fixed document id.
pub struct ProfileGateway {
    store: Arc<dyn DocumentStoreTrait>,
}

impl ProfileGateway {
    pub fn new(store: Arc<dyn DocumentStoreTrait>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileGatewayTrait for ProfileGateway {
    async fn get_user_profile(&self) -> Result<Option<UserProfile>> {
        self.store
            .get_document(PROFILE_COLLECTION, PROFILE_DOCUMENT_ID)
            .await?
            .map(|d| d.into_record())
            .transpose()
    }

    async fn update_user_profile(&self, update: ProfileUpdate) -> Result<()> {
        let existing = self
            .store
            .get_document(PROFILE_COLLECTION, PROFILE_DOCUMENT_ID)
            .await?;

        let mut write = DocumentWrite::from_record(&update)?.with_server_timestamp(UPDATED_AT_FIELD);
        if existing.is_none() {
            debug!("No user profile stored yet, creating it from the update");
            write = write.with_server_timestamp(CREATED_AT_FIELD);
        }

        self.store
            .set_document(PROFILE_COLLECTION, PROFILE_DOCUMENT_ID, write)
            .await
    }
}
