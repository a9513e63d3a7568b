use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use fintrack_core::documents::{
    merge_fields, sort_documents, Document, DocumentStoreTrait, DocumentWrite, OrderBy,
};
use fintrack_core::errors::StoreError;
use fintrack_core::Result;

use super::model::DocumentDB;
use crate::db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbPool, WriteHandle,
};
use crate::errors::StorageError;
use crate::schema::documents;

/// Document store backed by a single SQLite table.
///
/// Reads go through the connection pool; every write is funnelled through the
/// writer actor. Collections are ordered in memory after loading so that field
/// comparison matches the in-memory store exactly.
pub struct SqliteDocumentStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteDocumentStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteDocumentStore { pool, writer }
    }

    /// Opens (creating if needed) the database at `db_path`, applies pending
    /// migrations and starts the writer actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(db_path: &str) -> Result<Self> {
        init(db_path)?;
        let pool = create_pool(db_path)?;
        run_migrations(&pool)?;
        let writer = spawn_writer((*pool).clone());
        Ok(Self::new(pool, writer))
    }

    fn load_collection(&self, collection: &str) -> Result<Vec<Document>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = documents::table
            .filter(documents::collection.eq(collection))
            .order(documents::position.asc())
            .select(DocumentDB::as_select())
            .load::<DocumentDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Document::try_from(row).map_err(Into::into))
            .collect()
    }
}

fn find_row(conn: &mut SqliteConnection, collection: &str, id: &str) -> Result<Option<DocumentDB>> {
    Ok(documents::table
        .filter(documents::collection.eq(collection))
        .filter(documents::id.eq(id))
        .select(DocumentDB::as_select())
        .first::<DocumentDB>(conn)
        .optional()
        .map_err(StorageError::from)?)
}

fn next_position(conn: &mut SqliteConnection, collection: &str) -> Result<i64> {
    let current: Option<i64> = documents::table
        .filter(documents::collection.eq(collection))
        .select(max(documents::position))
        .first(conn)
        .map_err(StorageError::from)?;
    Ok(current.map_or(0, |p| p + 1))
}

fn insert_row(conn: &mut SqliteConnection, row: &DocumentDB) -> Result<()> {
    diesel::insert_into(documents::table)
        .values(row)
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

fn merge_into_row(conn: &mut SqliteConnection, row: DocumentDB, write: DocumentWrite) -> Result<()> {
    let mut fields = row.field_map()?;
    merge_fields(&mut fields, write.resolve(Utc::now()));
    let body = serde_json::to_string(&fields).map_err(StorageError::from)?;
    diesel::update(
        documents::table
            .filter(documents::collection.eq(&row.collection))
            .filter(documents::id.eq(&row.id)),
    )
    .set(documents::fields.eq(body))
    .execute(conn)
    .map_err(StorageError::from)?;
    Ok(())
}

#[async_trait]
impl DocumentStoreTrait for SqliteDocumentStore {
    async fn list_documents(
        &self,
        collection: &str,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>> {
        let mut docs = self.load_collection(collection)?;
        if let Some(order) = order {
            sort_documents(&mut docs, order);
        }
        Ok(docs)
    }

    async fn add_document(&self, collection: &str, write: DocumentWrite) -> Result<String> {
        let collection = collection.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<String> {
                let id = Uuid::new_v4().to_string();
                let position = next_position(conn, &collection)?;
                let row = DocumentDB::new(&collection, &id, &write.resolve(Utc::now()), position)?;
                insert_row(conn, &row)?;
                debug!("Added document {}/{}", collection, id);
                Ok(id)
            })
            .await
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        write: DocumentWrite,
    ) -> Result<()> {
        let collection = collection.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row = find_row(conn, &collection, &id)?.ok_or_else(|| {
                    StoreError::NotFound(format!("{}/{}", collection, id))
                })?;
                merge_into_row(conn, row, write)
            })
            .await
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let collection = collection.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(
                    documents::table
                        .filter(documents::collection.eq(&collection))
                        .filter(documents::id.eq(&id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let mut conn = get_connection(&self.pool)?;
        find_row(&mut conn, collection, id)?
            .map(|row| Document::try_from(row).map_err(Into::into))
            .transpose()
    }

    async fn set_document(&self, collection: &str, id: &str, write: DocumentWrite) -> Result<()> {
        let collection = collection.to_string();
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                match find_row(conn, &collection, &id)? {
                    Some(row) => merge_into_row(conn, row, write),
                    None => {
                        let position = next_position(conn, &collection)?;
                        let row =
                            DocumentDB::new(&collection, &id, &write.resolve(Utc::now()), position)?;
                        insert_row(conn, &row)
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::backup_database;
    use fintrack_core::budgets::{Budget, BudgetPeriod, BudgetUpdate, NewBudget};
    use fintrack_core::documents::FieldMap;
    use fintrack_core::gateway::Gateways;
    use fintrack_core::profile::ProfileUpdate;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    /// Opens a store on a fresh temp database; keep the dir alive for the test.
    fn create_test_store() -> (SqliteDocumentStore, String, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();
        let store = SqliteDocumentStore::open(&db_path_str).expect("Failed to open store");
        (store, db_path_str, temp_dir)
    }

    #[tokio::test]
    async fn test_add_then_list_in_insertion_order() {
        let (store, _, _temp_dir) = create_test_store();

        let first = store
            .add_document("cards", DocumentWrite::new(fields(json!({"name": "Visa"}))))
            .await
            .unwrap();
        let second = store
            .add_document("cards", DocumentWrite::new(fields(json!({"name": "Amex"}))))
            .await
            .unwrap();
        assert_ne!(first, second);

        let ids: Vec<String> = store
            .list_documents("cards", None)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![first, second]);

        let ordered = store
            .list_documents("cards", Some(&OrderBy::asc("name")))
            .await
            .unwrap();
        assert_eq!(ordered[0].fields["name"], "Amex");
        assert!(store.list_documents("goals", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_timestamps_are_written() {
        let (store, _, _temp_dir) = create_test_store();
        let write = DocumentWrite::new(fields(json!({"name": "Visa"})))
            .with_server_timestamp("createdAt");

        let id = store.add_document("cards", write).await.unwrap();

        let doc = store.get_document("cards", &id).await.unwrap().unwrap();
        assert!(doc.timestamp("createdAt").is_some());
    }

    #[tokio::test]
    async fn test_update_merges_and_missing_fails() {
        let (store, _, _temp_dir) = create_test_store();
        let id = store
            .add_document(
                "budgets",
                DocumentWrite::new(fields(json!({"name": "Groceries", "total": 500, "spent": 320}))),
            )
            .await
            .unwrap();

        store
            .update_document("budgets", &id, DocumentWrite::new(fields(json!({"spent": 450}))))
            .await
            .unwrap();
        let doc = store.get_document("budgets", &id).await.unwrap().unwrap();
        assert_eq!(doc.fields["spent"], 450);
        assert_eq!(doc.fields["total"], 500);

        let err = store
            .update_document("budgets", "missing", DocumentWrite::new(FieldMap::new()))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (store, _, _temp_dir) = create_test_store();
        let id = store
            .add_document("bills", DocumentWrite::new(fields(json!({"name": "Water Bill"}))))
            .await
            .unwrap();

        store.delete_document("bills", &id).await.unwrap();
        store.delete_document("bills", &id).await.unwrap();

        assert!(store.get_document("bills", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_document_creates_then_merges() {
        let (store, _, _temp_dir) = create_test_store();
        store
            .set_document(
                "userProfile",
                "current",
                DocumentWrite::new(fields(json!({"name": "Habiba", "currency": "AED"}))),
            )
            .await
            .unwrap();
        store
            .set_document(
                "userProfile",
                "current",
                DocumentWrite::new(fields(json!({"timezone": "Asia/Dubai"}))),
            )
            .await
            .unwrap();

        let doc = store
            .get_document("userProfile", "current")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.fields["name"], "Habiba");
        assert_eq!(doc.fields["timezone"], "Asia/Dubai");
    }

    #[tokio::test]
    async fn test_gateways_over_sqlite_store() {
        let (store, _, _temp_dir) = create_test_store();
        let gateways = Gateways::from_document_store(Arc::new(store));

        let budget = gateways
            .budgets
            .add(NewBudget {
                name: "Medicines".to_string(),
                total: 500.0,
                spent: 200.0,
                currency: "USD".to_string(),
                icon: "💊".to_string(),
                period: BudgetPeriod::Monthly,
            })
            .await
            .unwrap();
        gateways
            .budgets
            .update(
                &budget.id,
                BudgetUpdate {
                    spent: Some(250.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let budgets: Vec<Budget> = gateways.budgets.get_all().await.unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].spent, 250.0);

        gateways
            .profile
            .update_user_profile(ProfileUpdate {
                name: Some("Habiba".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let profile = gateways.profile.get_user_profile().await.unwrap().unwrap();
        assert_eq!(profile.name, "Habiba");
        assert_eq!(profile.currency, "USD");
    }

    #[tokio::test]
    async fn test_backup_copies_documents() {
        let (store, db_path, temp_dir) = create_test_store();
        let id = store
            .add_document("cards", DocumentWrite::new(fields(json!({"name": "Visa"}))))
            .await
            .unwrap();

        let backup_path = temp_dir.path().join("backups").join("copy.db");
        let backup_path_str = backup_path.to_string_lossy().to_string();
        backup_database(&db_path, &backup_path_str).unwrap();

        let restored = SqliteDocumentStore::open(&backup_path_str).unwrap();
        let doc = restored.get_document("cards", &id).await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "Visa");
    }
}
