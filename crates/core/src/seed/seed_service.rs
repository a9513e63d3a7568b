use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

use super::seed_data::DemoDataset;
use crate::bills::NewBill;
use crate::budgets::NewBudget;
use crate::cards::NewCard;
use crate::errors::Result;
use crate::gateway::{Entity, EntityGatewayTrait, Gateways};
use crate::goals::NewGoal;
use crate::notifications::NewNotification;
use crate::transactions::NewTransaction;
use crate::validation::ValidationResult;

/// Number of records written per collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub cards: usize,
    pub goals: usize,
    pub bills: usize,
    pub transactions: usize,
    pub budgets: usize,
    pub notifications: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.cards + self.goals + self.bills + self.transactions + self.budgets + self.notifications
    }
}

async fn seed_collection<E: Entity>(
    gateway: &Arc<dyn EntityGatewayTrait<E>>,
    records: Vec<E::New>,
    validate: fn(&E::New) -> ValidationResult,
) -> Result<usize> {
    info!("Adding {} {} records...", records.len(), E::KIND);
    let mut written = 0;
    for record in records {
        if let Err(e) = validate(&record) {
            warn!("Seeding {} that fails validation: {}", E::KIND, e);
        }
        gateway.add(record).await?;
        written += 1;
    }
    Ok(written)
}

/// Writes every record of `dataset` through the gateways, one at a time,
/// then writes the profile.
///
/// Stops at the first failed write; records written before it stay written.
pub async fn seed_remote_store(gateways: &Gateways, dataset: DemoDataset) -> Result<SeedReport> {
    info!("Starting to seed the document store");
    let report = SeedReport {
        cards: seed_collection(&gateways.cards, dataset.cards, NewCard::validate).await?,
        goals: seed_collection(&gateways.goals, dataset.goals, NewGoal::validate).await?,
        bills: seed_collection(&gateways.bills, dataset.bills, NewBill::validate).await?,
        transactions: seed_collection(
            &gateways.transactions,
            dataset.transactions,
            NewTransaction::validate,
        )
        .await?,
        budgets: seed_collection(&gateways.budgets, dataset.budgets, NewBudget::validate).await?,
        notifications: seed_collection(
            &gateways.notifications,
            dataset.notifications,
            NewNotification::validate,
        )
        .await?,
    };
    info!("Writing user profile...");
    gateways.profile.update_user_profile(dataset.profile).await?;
    info!("Seeded {} records and the user profile", report.total());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;
    use crate::documents::{DocumentStoreTrait, InMemoryDocumentStore};
    use crate::errors::{Error, StoreError};
    use crate::gateway::ProfileGatewayTrait;
    use crate::profile::{ProfileUpdate, UserProfile};
    use crate::seed::demo_dataset;

    #[tokio::test]
    async fn test_seed_writes_every_record() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let gateways = Gateways::from_document_store(store.clone());

        let report = seed_remote_store(&gateways, demo_dataset()).await.unwrap();

        assert_eq!(report.total(), 20);
        assert_eq!(store.document_count("cards").await, 2);
        assert_eq!(store.document_count("bills").await, 5);
        assert_eq!(store.document_count("notifications").await, 4);

        let profile = gateways.profile.get_user_profile().await.unwrap().unwrap();
        assert_eq!(profile.name, "Habiba");
        assert_eq!(profile.timezone, "Asia/Dubai");
    }

    #[tokio::test]
    async fn test_seed_writes_invalid_records_anyway() {
        let store: Arc<dyn DocumentStoreTrait> = Arc::new(InMemoryDocumentStore::new());
        let gateways = Gateways::from_document_store(store);
        let mut dataset = demo_dataset();
        dataset.cards = vec![NewCard {
            name: "Broken".to_string(),
            balance: 1.0,
            currency: "USD".to_string(),
            last_four: "12".to_string(),
            expiry: "01/30".to_string(),
            card_type: CardType::Primary,
        }];

        let report = seed_remote_store(&gateways, dataset).await.unwrap();

        assert_eq!(report.cards, 1);
        let cards = gateways.cards.get_all().await.unwrap();
        assert_eq!(cards[0].last_four, "12");
    }

    struct ReadOnlyProfileGateway;

    #[async_trait::async_trait]
    impl ProfileGatewayTrait for ReadOnlyProfileGateway {
        async fn get_user_profile(&self) -> Result<Option<UserProfile>> {
            Ok(None)
        }

        async fn update_user_profile(&self, _update: ProfileUpdate) -> Result<()> {
            Err(StoreError::PermissionDenied("profile is read-only".to_string()).into())
        }
    }

    #[tokio::test]
    async fn test_failed_profile_write_fails_the_seed() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut gateways = Gateways::from_document_store(store.clone());
        gateways.profile = Arc::new(ReadOnlyProfileGateway);

        let result = seed_remote_store(&gateways, demo_dataset()).await;

        assert!(matches!(
            result,
            Err(Error::Store(StoreError::PermissionDenied(_)))
        ));
        assert_eq!(store.document_count("notifications").await, 4);
    }
}
