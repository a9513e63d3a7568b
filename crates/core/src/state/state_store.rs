use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::future::join_all;
use log::{debug, error, info};

use super::cached_entity::CachedEntity;
use super::state_model::AppSnapshot;
use crate::bills::{Bill, BillUpdate, NewBill};
use crate::budgets::{Budget, BudgetUpdate, NewBudget};
use crate::cards::{Card, CardUpdate, NewCard};
use crate::errors::{Error, Result};
use crate::events::{ChangeKind, StateEvent, StateEventSink};
use crate::gateway::{EntityKind, Gateways};
use crate::goals::{Goal, GoalUpdate, NewGoal};
use crate::insights::income_allocation_chart;
use crate::notifications::{NewNotification, Notification, NotificationUpdate};
use crate::profile::{ProfileUpdate, UserProfile};
use crate::transactions::{NewTransaction, Transaction, TransactionUpdate};

/// In-memory cache of every collection, kept in step with the remote store.
///
/// Mutations await the remote write first and patch local state only after it
/// succeeds. A failed write is logged, reported to the event sink and
/// returned; local state is left exactly as it was.
///
/// The state lock is never held across an `.await`. There is no per-record
/// queuing: concurrent update and delete of one id race, and concurrent adds
/// land in completion order.
pub struct AppStateStore {
    gateways: Gateways,
    state: RwLock<AppSnapshot>,
    event_sink: Arc<dyn StateEventSink>,
}

struct LoadedData {
    cards: Vec<Card>,
    goals: Vec<Goal>,
    bills: Vec<Bill>,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    notifications: Vec<Notification>,
    profile: Option<UserProfile>,
}

impl AppStateStore {
    pub fn new(gateways: Gateways, event_sink: Arc<dyn StateEventSink>) -> Self {
        let initial = AppSnapshot {
            income_chart_data: income_allocation_chart(),
            loading: true,
            ..Default::default()
        };
        Self {
            gateways,
            state: RwLock::new(initial),
            event_sink,
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AppSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AppSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> AppSnapshot {
        self.read_state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn user_profile(&self) -> UserProfile {
        self.read_state().user_profile.clone()
    }

    /// The cached collection of one entity kind.
    pub fn list<E: CachedEntity>(&self) -> Vec<E> {
        E::cache(&self.read_state()).clone()
    }

    /// Looks up a cached record by id.
    pub fn find<E: CachedEntity>(&self, id: &str) -> Option<E> {
        E::cache(&self.read_state())
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    fn report_failure(&self, kind: EntityKind, operation: &str, err: Error) -> Error {
        error!("Error during {} of {}: {}", operation, kind, err);
        self.event_sink
            .emit(StateEvent::mutation_failed(kind, operation, err.to_string()));
        err
    }

    /// Loads every collection and the profile concurrently.
    ///
    /// Either every collection is replaced or none is. The loading flag is
    /// cleared in both cases.
    pub async fn load_all(&self) -> Result<()> {
        info!("Loading all collections from the document store");
        let (cards, goals, bills, transactions, budgets, notifications, profile) = futures::join!(
            self.gateways.cards.get_all(),
            self.gateways.goals.get_all(),
            self.gateways.bills.get_all(),
            self.gateways.transactions.get_all(),
            self.gateways.budgets.get_all(),
            self.gateways.notifications.get_all(),
            self.gateways.profile.get_user_profile(),
        );

        let loaded = (move || -> Result<LoadedData> {
            Ok(LoadedData {
                cards: cards?,
                goals: goals?,
                bills: bills?,
                transactions: transactions?,
                budgets: budgets?,
                notifications: notifications?,
                profile: profile?,
            })
        })();

        match loaded {
            Ok(data) => {
                {
                    let mut state = self.write_state();
                    state.cards = data.cards;
                    state.goals = data.goals;
                    state.bills = data.bills;
                    state.transactions = data.transactions;
                    state.budgets = data.budgets;
                    state.notifications = data.notifications;
                    if let Some(profile) = data.profile {
                        state.user_profile = profile;
                    }
                    state.loading = false;
                    info!(
                        "Loaded {} cards, {} goals, {} bills, {} transactions, {} budgets, {} notifications",
                        state.cards.len(),
                        state.goals.len(),
                        state.bills.len(),
                        state.transactions.len(),
                        state.budgets.len(),
                        state.notifications.len()
                    );
                }
                self.event_sink.emit(StateEvent::Loaded);
                Ok(())
            }
            Err(e) => {
                error!("Error loading data from the document store: {}", e);
                self.write_state().loading = false;
                self.event_sink.emit(StateEvent::LoadFailed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Writes a new record remotely, then adds it to the cache.
    pub async fn add<E: CachedEntity>(&self, new: E::New) -> Result<E> {
        let record = match E::gateway(&self.gateways).add(new).await {
            Ok(record) => record,
            Err(e) => return Err(self.report_failure(E::KIND, "add", e)),
        };
        debug!("Caching new {} {}", E::KIND, record.id());
        E::insert_added(E::cache_mut(&mut self.write_state()), record.clone());
        self.event_sink.emit(StateEvent::entities_changed(
            E::KIND,
            ChangeKind::Added,
            vec![record.id().to_string()],
        ));
        Ok(record)
    }

    /// Merges an update remotely, then into the cached record.
    ///
    /// Returns the merged record, or `None` if the id was not cached.
    pub async fn update<E: CachedEntity>(&self, id: &str, update: E::Update) -> Result<Option<E>> {
        if let Err(e) = E::gateway(&self.gateways).update(id, update.clone()).await {
            return Err(self.report_failure(E::KIND, "update", e));
        }
        let merged = {
            let mut state = self.write_state();
            E::cache_mut(&mut state)
                .iter_mut()
                .find(|r| r.id() == id)
                .map(|record| {
                    record.apply_update(&update);
                    record.clone()
                })
        };
        if merged.is_some() {
            self.event_sink.emit(StateEvent::entities_changed(
                E::KIND,
                ChangeKind::Updated,
                vec![id.to_string()],
            ));
        }
        Ok(merged)
    }

    /// Deletes remotely, then drops the cached record.
    ///
    /// Returns whether a cached record was removed.
    pub async fn delete<E: CachedEntity>(&self, id: &str) -> Result<bool> {
        if let Err(e) = E::gateway(&self.gateways).delete(id).await {
            return Err(self.report_failure(E::KIND, "delete", e));
        }
        let removed = {
            let mut state = self.write_state();
            let cache = E::cache_mut(&mut state);
            let before = cache.len();
            cache.retain(|r| r.id() != id);
            cache.len() != before
        };
        if removed {
            self.event_sink.emit(StateEvent::entities_changed(
                E::KIND,
                ChangeKind::Deleted,
                vec![id.to_string()],
            ));
        }
        Ok(removed)
    }

    // Cards

    pub async fn add_card(&self, card: NewCard) -> Result<Card> {
        self.add(card).await
    }

    pub async fn update_card(&self, id: &str, card: CardUpdate) -> Result<Option<Card>> {
        self.update::<Card>(id, card).await
    }

    pub async fn delete_card(&self, id: &str) -> Result<bool> {
        self.delete::<Card>(id).await
    }

    // Goals

    pub async fn add_goal(&self, goal: NewGoal) -> Result<Goal> {
        self.add(goal).await
    }

    pub async fn update_goal(&self, id: &str, goal: GoalUpdate) -> Result<Option<Goal>> {
        self.update::<Goal>(id, goal).await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<bool> {
        self.delete::<Goal>(id).await
    }

    // Bills

    pub async fn add_bill(&self, bill: NewBill) -> Result<Bill> {
        self.add(bill).await
    }

    pub async fn update_bill(&self, id: &str, bill: BillUpdate) -> Result<Option<Bill>> {
        self.update::<Bill>(id, bill).await
    }

    pub async fn delete_bill(&self, id: &str) -> Result<bool> {
        self.delete::<Bill>(id).await
    }

    // Transactions

    pub async fn add_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        self.add(transaction).await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        transaction: TransactionUpdate,
    ) -> Result<Option<Transaction>> {
        self.update::<Transaction>(id, transaction).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<bool> {
        self.delete::<Transaction>(id).await
    }

    // Budgets

    pub async fn add_budget(&self, budget: NewBudget) -> Result<Budget> {
        self.add(budget).await
    }

    pub async fn update_budget(&self, id: &str, budget: BudgetUpdate) -> Result<Option<Budget>> {
        self.update::<Budget>(id, budget).await
    }

    pub async fn delete_budget(&self, id: &str) -> Result<bool> {
        self.delete::<Budget>(id).await
    }

    // Notifications

    pub async fn add_notification(&self, notification: NewNotification) -> Result<Notification> {
        self.add(notification).await
    }

    pub async fn mark_notification_as_read(&self, id: &str) -> Result<Option<Notification>> {
        self.update::<Notification>(id, NotificationUpdate::mark_read())
            .await
    }

    /// Marks every unread notification as read.
    ///
    /// Issues one remote update per unread notification, all in flight at
    /// once. Local state flips only if every write succeeded; on failure some
    /// remote documents may already be marked read. Returns the number of
    /// notifications that were unread; with none unread nothing is written
    /// and no event is emitted.
    pub async fn mark_all_notifications_as_read(&self) -> Result<usize> {
        let unread: Vec<String> = self
            .read_state()
            .notifications
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        if unread.is_empty() {
            return Ok(0);
        }

        let gateway = &self.gateways.notifications;
        let results = join_all(
            unread
                .iter()
                .map(|id| gateway.update(id, NotificationUpdate::mark_read())),
        )
        .await;
        if let Some(e) = results.into_iter().find_map(|r| r.err()) {
            return Err(self.report_failure(EntityKind::Notification, "mark_all_read", e));
        }

        {
            let mut state = self.write_state();
            for notification in state.notifications.iter_mut() {
                notification.read = true;
            }
        }
        debug!("Marked {} notifications as read", unread.len());
        let count = unread.len();
        self.event_sink.emit(StateEvent::entities_changed(
            EntityKind::Notification,
            ChangeKind::Updated,
            unread,
        ));
        Ok(count)
    }

    pub async fn delete_notification(&self, id: &str) -> Result<bool> {
        self.delete::<Notification>(id).await
    }

    // User profile

    /// Writes the profile update remotely, then merges it into the cached profile.
    pub async fn update_user_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        if let Err(e) = self
            .gateways
            .profile
            .update_user_profile(update.clone())
            .await
        {
            return Err(self.report_failure(EntityKind::UserProfile, "update", e));
        }
        let profile = {
            let mut state = self.write_state();
            state.user_profile.apply_update(&update);
            state.user_profile.clone()
        };
        self.event_sink.emit(StateEvent::ProfileChanged);
        Ok(profile)
    }
}
