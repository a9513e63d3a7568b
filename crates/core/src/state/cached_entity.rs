use std::sync::Arc;

use super::state_model::AppSnapshot;
use crate::bills::Bill;
use crate::budgets::Budget;
use crate::cards::Card;
use crate::gateway::{Entity, EntityGatewayTrait, Gateways};
use crate::goals::Goal;
use crate::notifications::Notification;
use crate::transactions::Transaction;

/// Binds an entity kind to its cached collection and its gateway.
pub trait CachedEntity: Entity {
    fn cache(state: &AppSnapshot) -> &Vec<Self>;

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self>;

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>>;

    /// Places a newly added record in the cached collection. Appends by default.
    fn insert_added(cache: &mut Vec<Self>, record: Self) {
        cache.push(record);
    }
}

impl CachedEntity for Card {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.cards
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.cards
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.cards
    }
}

impl CachedEntity for Goal {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.goals
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.goals
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.goals
    }
}

impl CachedEntity for Bill {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.bills
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.bills
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.bills
    }
}

impl CachedEntity for Transaction {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.transactions
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.transactions
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.transactions
    }
}

impl CachedEntity for Budget {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.budgets
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.budgets
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.budgets
    }
}

impl CachedEntity for Notification {
    fn cache(state: &AppSnapshot) -> &Vec<Self> {
        &state.notifications
    }

    fn cache_mut(state: &mut AppSnapshot) -> &mut Vec<Self> {
        &mut state.notifications
    }

    fn gateway(gateways: &Gateways) -> &Arc<dyn EntityGatewayTrait<Self>> {
        &gateways.notifications
    }

    /// Newest notifications are shown first.
    fn insert_added(cache: &mut Vec<Self>, record: Self) {
        cache.insert(0, record);
    }
}
