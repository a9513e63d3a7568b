//! Gateway traits.
//!
//! One typed CRUD façade per entity kind plus a dedicated accessor for the
//! singleton user profile.

use async_trait::async_trait;

use super::entity::Entity;
use crate::errors::Result;
use crate::profile::{ProfileUpdate, UserProfile};

/// Typed CRUD operations over one collection.
#[async_trait]
pub trait EntityGatewayTrait<E: Entity>: Send + Sync {
    /// Loads the whole collection in its default order.
    async fn get_all(&self) -> Result<Vec<E>>;

    /// Writes a new record and returns it with the store-assigned id.
    ///
    /// Store timestamps are written remotely but not returned.
    async fn add(&self, new: E::New) -> Result<E>;

    /// Merges the supplied fields into an existing record.
    async fn update(&self, id: &str, update: E::Update) -> Result<()>;

    /// Removes a record by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Accessor for the single user profile document.
#[async_trait]
pub trait ProfileGatewayTrait: Send + Sync {
    /// Returns the stored profile, or `None` if none was ever written.
    async fn get_user_profile(&self) -> Result<Option<UserProfile>>;

    /// Creates the profile from `update` if absent, otherwise merges into it.
    async fn update_user_profile(&self, update: ProfileUpdate) -> Result<()>;
}
