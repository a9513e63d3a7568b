//! Entity kinds and the record contract shared by all collection entities.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BILLS_COLLECTION, BUDGETS_COLLECTION, CARDS_COLLECTION, GOALS_COLLECTION,
    NOTIFICATIONS_COLLECTION, PROFILE_COLLECTION, TRANSACTIONS_COLLECTION,
};
use crate::documents::OrderBy;

/// The seven kinds of data the tracker keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Card,
    Goal,
    Bill,
    Transaction,
    Budget,
    Notification,
    UserProfile,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Card,
        EntityKind::Goal,
        EntityKind::Bill,
        EntityKind::Transaction,
        EntityKind::Budget,
        EntityKind::Notification,
        EntityKind::UserProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Card => "card",
            EntityKind::Goal => "goal",
            EntityKind::Bill => "bill",
            EntityKind::Transaction => "transaction",
            EntityKind::Budget => "budget",
            EntityKind::Notification => "notification",
            EntityKind::UserProfile => "user_profile",
        }
    }

    /// Name of the backing document collection.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Card => CARDS_COLLECTION,
            EntityKind::Goal => GOALS_COLLECTION,
            EntityKind::Bill => BILLS_COLLECTION,
            EntityKind::Transaction => TRANSACTIONS_COLLECTION,
            EntityKind::Budget => BUDGETS_COLLECTION,
            EntityKind::Notification => NOTIFICATIONS_COLLECTION,
            EntityKind::UserProfile => PROFILE_COLLECTION,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record stored as one document in a collection.
///
/// `New` is the creation input (no identifier) and `Update` the partial
/// update where only supplied fields are written and merged.
pub trait Entity:
    Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    type New: Clone + Debug + Send + Sync + Serialize + 'static;
    type Update: Clone + Debug + Default + Send + Sync + Serialize + 'static;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Builds the record from its creation input and the store-assigned id.
    fn from_new(id: String, new: Self::New) -> Self;

    /// Shallow merge of the supplied fields of `update` into `self`.
    fn apply_update(&mut self, update: &Self::Update);

    /// Ordering used when listing the whole collection.
    fn default_order() -> OrderBy;
}
