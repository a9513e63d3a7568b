//! Tests for the document-backed gateways.

use std::sync::Arc;

use crate::bills::{Bill, BillStatus, BillUpdate, NewBill};
use crate::budgets::{Budget, BudgetPeriod, BudgetUpdate, NewBudget};
use crate::cards::{Card, CardType, NewCard};
use crate::constants::{CREATED_AT_FIELD, PROFILE_COLLECTION, PROFILE_DOCUMENT_ID, UPDATED_AT_FIELD};
use crate::documents::{DocumentStoreTrait, InMemoryDocumentStore};
use crate::gateway::{
    CollectionGateway, EntityGatewayTrait, ProfileGateway, ProfileGatewayTrait,
};
use crate::profile::ProfileUpdate;
use crate::transactions::{NewTransaction, Transaction, TransactionType};

fn new_card(name: &str) -> NewCard {
    NewCard {
        name: name.to_string(),
        balance: 100.0,
        currency: "USD".to_string(),
        last_four: "0123".to_string(),
        expiry: "04/29".to_string(),
        card_type: CardType::Secondary,
    }
}

fn new_bill(name: &str, due_date: &str) -> NewBill {
    NewBill {
        name: name.to_string(),
        amount: 10.0,
        currency: "USD".to_string(),
        status: BillStatus::Unpaid,
        due_date: due_date.to_string(),
        payment_method: None,
        icon: "💧".to_string(),
    }
}

fn new_transaction(name: &str, date: &str) -> NewTransaction {
    NewTransaction {
        name: name.to_string(),
        amount: -5.0,
        currency: "USD".to_string(),
        transaction_type: TransactionType::Expense,
        category: "Food".to_string(),
        description: String::new(),
        date: date.to_string(),
        icon: "🥗".to_string(),
    }
}

#[tokio::test]
async fn test_add_returns_record_with_store_id_and_writes_timestamps() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Card>::new(store.clone());

    let card = gateway.add(new_card("Travel")).await.unwrap();
    assert!(!card.id.is_empty());
    assert_eq!(card.name, "Travel");

    let document = store.get_document("cards", &card.id).await.unwrap().unwrap();
    assert!(document.timestamp(CREATED_AT_FIELD).is_some());
    assert!(document.timestamp(UPDATED_AT_FIELD).is_some());
    assert!(!document.fields.contains_key("id"));
}

#[tokio::test]
async fn test_get_all_applies_default_ordering() {
    let store = Arc::new(InMemoryDocumentStore::new());

    let cards = CollectionGateway::<Card>::new(store.clone());
    cards.add(new_card("Savings")).await.unwrap();
    cards.add(new_card("Everyday")).await.unwrap();
    let names: Vec<_> = cards
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Everyday", "Savings"]);

    let bills = CollectionGateway::<Bill>::new(store.clone());
    bills.add(new_bill("Electricity", "2022-11-11")).await.unwrap();
    bills.add(new_bill("Food Panda", "2022-11-10")).await.unwrap();
    let first = &bills.get_all().await.unwrap()[0];
    assert_eq!(first.name, "Food Panda");

    let transactions = CollectionGateway::<Transaction>::new(store);
    transactions
        .add(new_transaction("Dentist", "2022-11-01"))
        .await
        .unwrap();
    transactions
        .add(new_transaction("Restaurant", "2022-11-13"))
        .await
        .unwrap();
    let first = &transactions.get_all().await.unwrap()[0];
    assert_eq!(first.name, "Restaurant");
}

#[tokio::test]
async fn test_get_all_on_empty_collection_is_empty() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Budget>::new(store);
    assert!(gateway.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Budget>::new(store);
    let budget = gateway
        .add(NewBudget {
            name: "Groceries".to_string(),
            total: 500.0,
            spent: 320.0,
            currency: "USD".to_string(),
            icon: "🛒".to_string(),
            period: BudgetPeriod::Monthly,
        })
        .await
        .unwrap();

    gateway
        .update(
            &budget.id,
            BudgetUpdate {
                spent: Some(450.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = gateway.get_all().await.unwrap().remove(0);
    assert_eq!(stored.total, 500.0);
    assert_eq!(stored.spent, 450.0);
    assert_eq!(stored.name, "Groceries");
}

#[tokio::test]
async fn test_update_with_cleared_payment_method_stores_null() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Bill>::new(store.clone());
    let bill = gateway
        .add(NewBill {
            status: BillStatus::Paid,
            payment_method: Some("Credit Card".to_string()),
            ..new_bill("Internet", "2022-11-20")
        })
        .await
        .unwrap();

    gateway
        .update(
            &bill.id,
            BillUpdate {
                status: Some(BillStatus::Unpaid),
                payment_method: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let document = store.get_document("bills", &bill.id).await.unwrap().unwrap();
    assert_eq!(document.fields.get("paymentMethod"), Some(&serde_json::Value::Null));
    let stored = gateway.get_all().await.unwrap();
    assert_eq!(stored[0].status, BillStatus::Unpaid);
    assert_eq!(stored[0].payment_method, None);
    assert_eq!(stored[0].name, "Internet");
}

#[tokio::test]
async fn test_update_unknown_id_propagates_not_found() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Budget>::new(store);
    let err = gateway
        .update("missing", BudgetUpdate::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_removes_document() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = CollectionGateway::<Card>::new(store.clone());
    let card = gateway.add(new_card("Old")).await.unwrap();

    gateway.delete(&card.id).await.unwrap();
    assert_eq!(store.document_count("cards").await, 0);
    gateway.delete(&card.id).await.unwrap();
}

#[tokio::test]
async fn test_profile_absent_then_created_from_partial_then_merged() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let gateway = ProfileGateway::new(store.clone());

    assert!(gateway.get_user_profile().await.unwrap().is_none());

    gateway
        .update_user_profile(ProfileUpdate {
            name: Some("Habiba".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let created = store
        .get_document(PROFILE_COLLECTION, PROFILE_DOCUMENT_ID)
        .await
        .unwrap()
        .unwrap();
    let created_at = created.timestamp(CREATED_AT_FIELD);
    assert!(created_at.is_some());

    gateway
        .update_user_profile(ProfileUpdate {
            currency: Some("AED".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let profile = gateway.get_user_profile().await.unwrap().unwrap();
    assert_eq!(profile.id, PROFILE_DOCUMENT_ID);
    assert_eq!(profile.name, "Habiba");
    assert_eq!(profile.currency, "AED");
    assert_eq!(store.document_count(PROFILE_COLLECTION).await, 1);

    let merged = store
        .get_document(PROFILE_COLLECTION, PROFILE_DOCUMENT_ID)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(merged.timestamp(CREATED_AT_FIELD), created_at);
}
