//! Remote store gateway - typed CRUD façades over the document store.

mod collection_gateway;
mod entity;
mod gateway_traits;
mod profile_gateway;

#[cfg(test)]
mod gateway_tests;

use std::sync::Arc;

pub use collection_gateway::CollectionGateway;
pub use entity::{Entity, EntityKind};
pub use gateway_traits::{EntityGatewayTrait, ProfileGatewayTrait};
pub use profile_gateway::ProfileGateway;

use crate::bills::Bill;
use crate::budgets::Budget;
use crate::cards::Card;
use crate::documents::DocumentStoreTrait;
use crate::goals::Goal;
use crate::notifications::Notification;
use crate::transactions::Transaction;

/// The full set of gateways the application state store talks to.
#[derive(Clone)]
pub struct Gateways {
    pub cards: Arc<dyn EntityGatewayTrait<Card>>,
    pub goals: Arc<dyn EntityGatewayTrait<Goal>>,
    pub bills: Arc<dyn EntityGatewayTrait<Bill>>,
    pub transactions: Arc<dyn EntityGatewayTrait<Transaction>>,
    pub budgets: Arc<dyn EntityGatewayTrait<Budget>>,
    pub notifications: Arc<dyn EntityGatewayTrait<Notification>>,
    pub profile: Arc<dyn ProfileGatewayTrait>,
}

impl Gateways {
    /// Builds document-backed gateways for every entity kind over one store.
    pub fn from_document_store(store: Arc<dyn DocumentStoreTrait>) -> Self {
        Self {
            cards: Arc::new(CollectionGateway::<Card>::new(store.clone())),
            goals: Arc::new(CollectionGateway::<Goal>::new(store.clone())),
            bills: Arc::new(CollectionGateway::<Bill>::new(store.clone())),
            transactions: Arc::new(CollectionGateway::<Transaction>::new(store.clone())),
            budgets: Arc::new(CollectionGateway::<Budget>::new(store.clone())),
            notifications: Arc::new(CollectionGateway::<Notification>::new(store.clone())),
            profile: Arc::new(ProfileGateway::new(store)),
        }
    }
}
