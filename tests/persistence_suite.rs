use std::fs;

use expense_tracker::config::TrackerPaths;
use expense_tracker::models::{Categories, Document, Expense, ExpenseId, Metadata};
use expense_tracker::services::{CreateExpenseInput, ExpenseQuery, ExpenseService};
use expense_tracker::storage::Storage;
use tempfile::TempDir;

fn metadata() -> Metadata {
    Metadata {
        currency: "INR".into(),
        created_by: "Tester".into(),
        created_on: "2024-01-01".into(),
        last_updated: "2024-01-02".into(),
    }
}

fn fresh_store(dir: &TempDir, expenses: Vec<Expense>) -> TrackerPaths {
    let paths = TrackerPaths::with_data_file(dir.path().join("expenses.json"));
    let document = Document {
        categories: Categories::new(["Food", "Transport", "Bills"]),
        expenses,
        metadata: metadata(),
    };
    Storage::with_document(paths.clone(), document)
        .persist()
        .unwrap();
    paths
}

fn input(date: &str, category: &str, amount: &str) -> CreateExpenseInput {
    CreateExpenseInput {
        date: date.into(),
        category: category.into(),
        description: "item".into(),
        amount: amount.into(),
    }
}

fn expense(id: u64, category: &str, amount: f64) -> Expense {
    Expense::new(ExpenseId::new(id), "2024-01-05", category, "Item", amount)
}

#[test]
fn added_expense_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(&temp_dir, vec![expense(4, "Food", 1.0)]);

    let mut storage = Storage::load(paths.clone()).unwrap();
    let created = ExpenseService::new(&mut storage)
        .add_expense(input("2024-03-01", "bills", "-20.75"))
        .unwrap();
    assert_eq!(created.id, ExpenseId::new(5));

    let reloaded = Storage::load(paths).unwrap();
    assert_eq!(reloaded.expenses().last(), Some(&created));
    assert_eq!(reloaded.metadata(), &metadata());
}

#[test]
fn scenario_first_expense() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(&temp_dir, Vec::new());

    let mut storage = Storage::load(paths).unwrap();
    let created = ExpenseService::new(&mut storage)
        .add_expense(input("2024-01-05", "Food", "12.50"))
        .unwrap();

    assert_eq!(created.id, ExpenseId::new(1));
    assert_eq!(created.amount, 12.5);
    assert_eq!(created.category, "Food");
}

#[test]
fn rejected_inputs_do_not_touch_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(&temp_dir, vec![expense(1, "Food", 3.0)]);
    let before = fs::read_to_string(paths.data_file()).unwrap();

    let mut storage = Storage::load(paths.clone()).unwrap();
    let mut service = ExpenseService::new(&mut storage);

    assert!(service
        .add_expense(input("2024-01-05", "unknown", "1"))
        .unwrap_err()
        .is_validation());
    assert!(service
        .add_expense(input("2024-01-05", "Food", "abc"))
        .unwrap_err()
        .is_validation());
    assert!(service
        .remove_expense(ExpenseId::new(99))
        .unwrap_err()
        .is_not_found());

    assert_eq!(service.query().list_all().len(), 1);
    assert_eq!(fs::read_to_string(paths.data_file()).unwrap(), before);
}

#[test]
fn deleting_only_expense_empties_file() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(&temp_dir, vec![expense(1, "Food", 3.0)]);

    let mut storage = Storage::load(paths.clone()).unwrap();
    let removed = ExpenseService::new(&mut storage)
        .remove_expense(ExpenseId::new(1))
        .unwrap();
    assert_eq!(removed.amount, 3.0);

    let reloaded = Storage::load(paths.clone()).unwrap();
    assert!(reloaded.expenses().is_empty());

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(paths.data_file()).unwrap()).unwrap();
    assert_eq!(raw["expenses"], serde_json::json!([]));
}

#[test]
fn duplicate_ids_remove_first_only() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(
        &temp_dir,
        vec![expense(1, "Food", 1.0), expense(1, "Transport", 2.0)],
    );

    let mut storage = Storage::load(paths).unwrap();
    let removed = ExpenseService::new(&mut storage)
        .remove_expense(ExpenseId::new(1))
        .unwrap();

    assert_eq!(removed.category, "Food");
    assert_eq!(storage.expenses().len(), 1);
    assert_eq!(storage.expenses()[0].category, "Transport");
}

#[test]
fn filters_partition_and_sum() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(
        &temp_dir,
        vec![expense(1, "Food", 12.5), expense(2, "Transport", 7.25)],
    );

    let storage = Storage::load(paths).unwrap();
    let query = ExpenseQuery::new(&storage);

    let food = query.filter_by_category("Food");
    assert_eq!(food.len(), 1);
    assert_eq!(food.total, 12.5);

    let transport = query.filter_by_category("Transport");
    assert_eq!(transport.len(), 1);
    assert_eq!(transport.total, 7.25);

    let day = query.filter_by_date("2024-01-05").unwrap();
    assert_eq!(day.len(), 2);
    assert_eq!(day.total, 19.75);
}

#[test]
fn document_round_trip_is_structural_identity() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(
        &temp_dir,
        vec![expense(3, "Bills", 100.0), expense(1, "Food", -2.5)],
    );

    let first = Storage::load(paths.clone()).unwrap();
    first.persist().unwrap();
    let second = Storage::load(paths.clone()).unwrap();

    assert_eq!(first.document(), second.document());
    assert_eq!(
        second.categories().as_slice(),
        &["Food".to_string(), "Transport".to_string(), "Bills".to_string()][..]
    );

    let text = fs::read_to_string(paths.data_file()).unwrap();
    assert!(text.starts_with("{\n    \"categories\": [\n        \"Food\""));
}

#[test]
fn exhausted_ids_reject_add_and_keep_file() {
    let temp_dir = TempDir::new().unwrap();
    let paths = fresh_store(&temp_dir, vec![expense(u64::MAX, "Food", 1.0)]);
    let before = fs::read_to_string(paths.data_file()).unwrap();

    let mut storage = Storage::load(paths.clone()).unwrap();
    let err = ExpenseService::new(&mut storage)
        .add_expense(input("2024-01-06", "Food", "2"))
        .unwrap_err();

    assert!(!err.is_fatal());
    assert_eq!(storage.expenses().len(), 1);
    assert_eq!(fs::read_to_string(paths.data_file()).unwrap(), before);
}

fn store_with_raw_dates(dir: &TempDir, dates: &[&str]) -> TrackerPaths {
    let expenses: Vec<_> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            serde_json::json!({
                "id": i + 1,
                "date": date,
                "category": "Food",
                "description": "Item",
                "amount": 1.0
            })
        })
        .collect();
    let document = serde_json::json!({
        "categories": ["Food"],
        "expenses": expenses,
        "metadata": {"currency": "INR", "created_by": "Tester", "created_on": "2024-01-01", "last_updated": "2024-01-02"}
    });

    let path = dir.path().join("expenses.json");
    fs::write(&path, document.to_string()).unwrap();
    TrackerPaths::with_data_file(path)
}

#[test]
fn unpadded_file_dates_are_kept_and_matched_as_text() {
    let temp_dir = TempDir::new().unwrap();
    let paths = store_with_raw_dates(&temp_dir, &["2024-1-5", "2024-01-05"]);

    let mut storage = Storage::load(paths.clone()).unwrap();
    let day = ExpenseQuery::new(&storage).filter_by_date("2024-01-05").unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day.expenses[0].id, ExpenseId::new(2));

    let mut service = ExpenseService::new(&mut storage);
    service
        .add_expense(input("2024-01-07", "Food", "3"))
        .unwrap();
    service.remove_expense(ExpenseId::new(2)).unwrap();

    let reloaded = Storage::load(paths).unwrap();
    assert_eq!(reloaded.expenses()[0].date, "2024-1-5");
    assert_eq!(reloaded.expenses()[1].date, "2024-01-07");
}

#[test]
fn foreign_date_format_in_file_still_loads() {
    let temp_dir = TempDir::new().unwrap();
    let paths = store_with_raw_dates(&temp_dir, &["05/01/2024", "not a date"]);

    let storage = Storage::load(paths).unwrap();
    assert_eq!(storage.expenses().len(), 2);
    assert_eq!(storage.expenses()[0].date, "05/01/2024");
    assert!(ExpenseQuery::new(&storage)
        .filter_by_date("2024-01-05")
        .unwrap()
        .is_empty());
}
