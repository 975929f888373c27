//! Tests for the status command.

use super::*;
use ms_db::execute_migrations;

fn script(name: &str, sql: &str) -> MigrationScript {
    MigrationScript::new(name, sql).unwrap()
}

#[test]
fn missing_ledger_means_every_script_is_pending() {
    let db = MigratorDb::open_memory().unwrap();
    let scripts = [script("001.sql", "CREATE TABLE a(x INT)")];

    let stamps = applied_stamps(&db).unwrap();
    assert!(stamps.is_empty());

    let rows = status_rows(&scripts, &stamps);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, ScriptStatus::Pending);
    assert!(rows[0].applied_on.is_none());
}

#[test]
fn applied_and_pending_scripts_are_distinguished() {
    let db = MigratorDb::open_memory().unwrap();
    let scripts = [
        script("001_first.sql", "CREATE TABLE a(x INT)"),
        script("002_second.sql", "CREATE TABLE b(y INT)"),
    ];
    execute_migrations(&db, &scripts[..1], true).unwrap();

    let stamps = applied_stamps(&db).unwrap();
    let rows = status_rows(&scripts, &stamps);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "001_first.sql");
    assert_eq!(rows[0].status, ScriptStatus::Applied);
    assert!(rows[0].applied_on.is_some());
    assert_eq!(rows[1].name, "002_second.sql");
    assert_eq!(rows[1].status, ScriptStatus::Pending);
    assert!(rows[1].applied_on.is_none());
}

#[test]
fn json_output_has_one_object_per_discovered_script() {
    let db = MigratorDb::open_memory().unwrap();
    let scripts = [
        script("001_first.sql", "CREATE TABLE a(x INT)"),
        script("002_second.sql", "CREATE TABLE b(y INT)"),
        script("003_third.sql", "CREATE TABLE c(z INT)"),
    ];
    execute_migrations(&db, &scripts[..2], true).unwrap();

    let rows = status_rows(&scripts, &applied_stamps(&db).unwrap());
    let json = serde_json::to_value(&rows).unwrap();
    let objects = json.as_array().unwrap();

    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0]["name"], "001_first.sql");
    assert_eq!(objects[0]["status"], "applied");
    assert!(objects[0]["applied_on"].is_string());
    // Pending rows omit the stamp entirely.
    assert_eq!(objects[2]["status"], "pending");
    assert!(objects[2].get("applied_on").is_none());
}

#[test]
fn orphaned_entries_exclude_the_bookkeeping_row() {
    let db = MigratorDb::open_memory().unwrap();
    let removed = [script("gone.sql", "CREATE TABLE gone(x INT)")];
    execute_migrations(&db, &removed, true).unwrap();

    // The script file was deleted from disk; only "gone.sql" is orphaned,
    // not the ledger-creation bookkeeping row.
    let on_disk: [MigrationScript; 0] = [];
    let stamps = applied_stamps(&db).unwrap();
    assert_eq!(orphaned_entries(&stamps, &on_disk), 1);

    let still_on_disk = [script("gone.sql", "CREATE TABLE gone(x INT)")];
    assert_eq!(orphaned_entries(&stamps, &still_on_disk), 0);
}
