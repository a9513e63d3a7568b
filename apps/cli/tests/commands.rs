use fintrack_cli::commands::{run, Command};
use fintrack_cli::config::{Config, LogFormat};
use fintrack_cli::{build_state, AppState};
use tempfile::tempdir;

fn test_state(dir: &tempfile::TempDir) -> AppState {
    let config = Config {
        db_path: dir.path().join("test.db").to_string_lossy().to_string(),
        log_format: LogFormat::Text,
    };
    build_state(&config).unwrap()
}

#[tokio::test]
async fn seed_then_summarize() {
    let tmp = tempdir().unwrap();
    let state = test_state(&tmp);

    let output = run(&Command::Seed { force: false }, &state).await.unwrap();
    assert!(output.starts_with("Seeded 20 records"));

    let summary = run(&Command::Summary, &state).await.unwrap();
    assert!(summary.contains("Hello, Habiba"));
    assert!(summary.contains("Total balance: 30000.00 USD across 2 cards"));
    assert!(summary.contains("Unpaid bills: 3"));
    assert!(summary.contains("Unread notifications: 2"));
}

#[tokio::test]
async fn seed_refuses_non_empty_store() {
    let tmp = tempdir().unwrap();
    let state = test_state(&tmp);
    run(&Command::Seed { force: false }, &state).await.unwrap();

    let output = run(&Command::Seed { force: false }, &state).await.unwrap();
    assert!(output.contains("--force"));

    let forced = run(&Command::Seed { force: true }, &state).await.unwrap();
    assert!(forced.starts_with("Seeded 20 records"));
}

#[tokio::test]
async fn search_and_mark_all_read() {
    let tmp = tempdir().unwrap();
    let state = test_state(&tmp);
    run(&Command::Seed { force: false }, &state).await.unwrap();

    let hits = run(
        &Command::Search {
            query: "google pay".to_string(),
        },
        &state,
    )
    .await
    .unwrap();
    assert!(hits.starts_with("2 matches"));

    let none = run(
        &Command::Search {
            query: "nothing like this".to_string(),
        },
        &state,
    )
    .await
    .unwrap();
    assert!(none.starts_with("No matches"));

    let marked = run(&Command::MarkAllRead, &state).await.unwrap();
    assert_eq!(marked, "Marked 2 notifications as read");
    let again = run(&Command::MarkAllRead, &state).await.unwrap();
    assert_eq!(again, "No unread notifications");
}

#[tokio::test]
async fn backup_writes_a_copy() {
    let tmp = tempdir().unwrap();
    let state = test_state(&tmp);
    run(&Command::Seed { force: false }, &state).await.unwrap();

    let target = tmp.path().join("backups").join("copy.db");
    let output = run(
        &Command::Backup {
            path: target.to_string_lossy().to_string(),
        },
        &state,
    )
    .await
    .unwrap();

    assert!(output.starts_with("Backed up"));
    assert!(target.exists());
}
