// crates/db/tests/insights_test.rs
//! Integration tests for the insight store.

use cruxlog_db::Database;
use uuid::Uuid;

mod fixtures;
use fixtures::insight;

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let db = Database::new_in_memory().await.unwrap();

    let created = db
        .create_insight(&insight("Open-hand more on slopers", true))
        .await
        .unwrap();
    assert!(created.pinned);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = db.get_insight(created.id).await.unwrap().expect("insight exists");
    assert_eq!(fetched, created);
    assert_eq!(fetched.content, "Open-hand more on slopers");
}

#[tokio::test]
async fn test_get_missing_insight_returns_none() {
    let db = Database::new_in_memory().await.unwrap();
    assert!(db.get_insight(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_pinned_first_then_recency() {
    let db = Database::new_in_memory().await.unwrap();

    let older = db.create_insight(&insight("older note", false)).await.unwrap();
    let pinned = db.create_insight(&insight("pinned note", true)).await.unwrap();
    let newer = db.create_insight(&insight("newer note", false)).await.unwrap();

    let listed = db.list_insights().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![pinned.id, newer.id, older.id]);
}

#[tokio::test]
async fn test_update_refreshes_updated_at_and_preserves_created_at() {
    let db = Database::new_in_memory().await.unwrap();

    let created = db.create_insight(&insight("draft thought", false)).await.unwrap();
    let updated = db
        .update_insight(created.id, &insight("refined thought", true))
        .await
        .unwrap()
        .expect("insight exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "refined thought");
    assert!(updated.pinned);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_missing_insight_returns_none() {
    let db = Database::new_in_memory().await.unwrap();
    let result = db
        .update_insight(Uuid::new_v4(), &insight("anything", false))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_existence() {
    let db = Database::new_in_memory().await.unwrap();

    let created = db.create_insight(&insight("short-lived", false)).await.unwrap();
    assert!(db.delete_insight(created.id).await.unwrap());
    assert!(db.get_insight(created.id).await.unwrap().is_none());
    assert!(!db.delete_insight(created.id).await.unwrap());
}
