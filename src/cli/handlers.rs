//! Menu action handlers
//!
//! One function per menu entry. Each prompts for what it needs, calls the
//! expense service or query once and prints the outcome. Problems with the user's
//! input are reported here and the handler returns `Ok(())`; only storage
//! or console failures come back as errors.

use std::io::{BufRead, Write};

use crate::display::{
    format_about, format_category_list, format_category_matches, format_category_picker,
    format_date_matches, format_deletion, format_expense_list, format_recorded, SEPARATOR,
};
use crate::error::{ExpenseResult, InvalidField};
use crate::services::{CreateExpenseInput, ExpenseQuery, ExpenseService};
use crate::storage::Storage;
use crate::validation::{parse_expense_id, parse_selection};

use super::console::Console;
use super::feedback::Feedback;

/// 1. Add Expense
pub fn add_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    feedback: &mut dyn Feedback,
) -> ExpenseResult<()> {
    let Some(date) = console.prompt("Enter Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(category) = console.prompt("Enter Category: ")? else {
        return Ok(());
    };
    let Some(description) = console.prompt("Enter Description: ")? else {
        return Ok(());
    };
    let Some(amount) = console.prompt("Enter Amount: ")? else {
        return Ok(());
    };

    let result = ExpenseService::new(storage).add_expense(CreateExpenseInput {
        date,
        category,
        description,
        amount,
    });

    let expense = match result {
        Ok(expense) => expense,
        Err(e) => {
            let message = match e.invalid_field() {
                Some(InvalidField::Date) => "Error: Invalid date format. Use YYYY-MM-DD.",
                Some(InvalidField::Category) => "Error: Category not found.",
                Some(InvalidField::Amount) => "Error: Amount must be numeric.",
                None => return Err(e),
            };
            console.line(message)?;
            return Ok(());
        }
    };

    feedback.show("Saving Data", console.output())?;
    console.line("Expense recorded successfully.")?;
    console.line(format_recorded(&expense))?;

    Ok(())
}

/// 2. Remove Expense
pub fn remove_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    feedback: &mut dyn Feedback,
) -> ExpenseResult<()> {
    let Some(raw) = console.prompt("Enter the Transaction ID to delete: ")? else {
        return Ok(());
    };

    let Ok(id) = parse_expense_id(&raw) else {
        console.line("Error: Transaction ID must be a number.")?;
        return Ok(());
    };

    let currency = storage.metadata().currency.clone();

    match ExpenseService::new(storage).remove_expense(id) {
        Ok(expense) => {
            console.line(format_deletion(&expense, &currency))?;
            feedback.show("Deleting Data", console.output())?;
            console.line("Expense deleted successfully.")?;
        }
        Err(e) if e.is_not_found() => {
            console.line(format!("Error: Transaction ID {} not found.", id))?;
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// 3. View All Expenses
pub fn view_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    feedback: &mut dyn Feedback,
) -> ExpenseResult<()> {
    console.line("Showing All Expenses:\n")?;
    feedback.show("Loading", console.output())?;

    console.text(&format_expense_list(ExpenseQuery::new(storage).list_all()))?;

    Ok(())
}

/// 4. Filter by Category
pub fn filter_by_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> ExpenseResult<()> {
    let query = ExpenseQuery::new(storage);
    let categories = query.list_categories();

    console.line("\n--- FILTER BY CATEGORY ---")?;
    console.text(&format_category_picker(categories))?;

    let Some(raw) = console.prompt("Select Category: ")? else {
        return Ok(());
    };

    let Ok(choice) = parse_selection(&raw) else {
        console.line("Invalid input.")?;
        return Ok(());
    };

    if choice == categories.len() + 1 {
        return Ok(());
    }

    let Ok(category) = query.category_at(choice) else {
        console.line("Invalid category selection.")?;
        return Ok(());
    };

    let result = query.filter_by_category(category);
    console.text(&format_category_matches(category, &result))?;

    Ok(())
}

/// 5. Filter by Date
pub fn filter_by_date<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> ExpenseResult<()> {
    let Some(date) = console.prompt("Enter Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    match ExpenseQuery::new(storage).filter_by_date(&date) {
        Ok(result) => console.text(&format_date_matches(&date, &result))?,
        Err(e) if e.is_validation() => console.line("Invalid date format.")?,
        Err(e) => return Err(e),
    }

    Ok(())
}

/// 6. View All Categories
pub fn view_categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> ExpenseResult<()> {
    console.line("All categories:")?;
    console.text(&format_category_list(ExpenseQuery::new(storage).list_categories()))?;
    console.line(SEPARATOR)?;

    Ok(())
}

/// 7. About this Project
pub fn about<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> ExpenseResult<()> {
    console.line("")?;
    console.text(&format_about(ExpenseQuery::new(storage).metadata()))?;
    console.line(SEPARATOR)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::feedback::SilentFeedback;
    use crate::config::TrackerPaths;
    use crate::models::{Categories, Document, Expense, ExpenseId, Metadata};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        let document = Document {
            categories: Categories::new(["Food", "Transport"]),
            expenses: Vec::new(),
            metadata: Metadata {
                currency: "INR".into(),
                ..Metadata::default()
            },
        };
        Storage::with_document(
            TrackerPaths::with_data_file(dir.path().join("expenses.json")),
            document,
        )
    }

    fn console(script: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_expense_success() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage(&temp_dir);
        let mut console = console("2024-01-05\nfood\nlunch\n12.50\n");

        add_expense(&mut console, &mut storage, &mut SilentFeedback).unwrap();

        assert_eq!(storage.expenses().len(), 1);
        assert_eq!(storage.expenses()[0].category, "Food");
        assert!(output(console).contains("Expense recorded successfully."));
    }

    #[test]
    fn test_add_expense_messages() {
        let cases = [
            ("2024-13-05\nFood\nx\n1\n", "Error: Invalid date format. Use YYYY-MM-DD."),
            ("2024-01-05\nunknown\nx\n1\n", "Error: Category not found."),
            ("2024-01-05\nFood\nx\nabc\n", "Error: Amount must be numeric."),
        ];

        for (script, message) in cases {
            let temp_dir = TempDir::new().unwrap();
            let mut storage = storage(&temp_dir);
            let mut console = console(script);

            add_expense(&mut console, &mut storage, &mut SilentFeedback).unwrap();

            assert!(storage.expenses().is_empty());
            let text = output(console);
            assert!(text.contains(message), "expected {message:?}");
            assert_eq!(text.matches("Error:").count(), 1);
        }
    }

    #[test]
    fn test_add_expense_first_bad_field_wins() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage(&temp_dir);
        let mut c = console("2024-1-5\nunknown\nx\nabc\n");

        add_expense(&mut c, &mut storage, &mut SilentFeedback).unwrap();

        let text = output(c);
        assert!(text.contains("Error: Invalid date format. Use YYYY-MM-DD."));
        assert!(!text.contains("Category not found"));
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_add_expense_with_ids_exhausted_reports_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut document = storage(&temp_dir).document().clone();
        document
            .expenses
            .push(Expense::new(ExpenseId::new(u64::MAX), "2024-01-01", "Food", "Old", 1.0));
        let mut storage = Storage::with_document(
            TrackerPaths::with_data_file(temp_dir.path().join("expenses.json")),
            document,
        );

        let err = add_expense(
            &mut console("2024-01-05\nFood\nlunch\n1\n"),
            &mut storage,
            &mut SilentFeedback,
        )
        .unwrap_err();

        assert!(!err.is_fatal());
        assert_eq!(storage.expenses().len(), 1);
    }

    #[test]
    fn test_read_only_actions_share_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);
        let shared = &storage;

        let mut c = console("");
        view_all(&mut c, shared, &mut SilentFeedback).unwrap();
        view_categories(&mut c, shared).unwrap();
        about(&mut c, shared).unwrap();

        let text = output(c);
        assert!(text.contains("No expenses recorded."));
        assert!(text.contains("1. Food"));
    }

    #[test]
    fn test_remove_expense_paths() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage(&temp_dir);
        add_expense(
            &mut console("2024-01-05\nFood\nlunch\n40\n"),
            &mut storage,
            &mut SilentFeedback,
        )
        .unwrap();

        let mut c = console("abc\n");
        remove_expense(&mut c, &mut storage, &mut SilentFeedback).unwrap();
        assert!(output(c).contains("Error: Transaction ID must be a number."));

        let mut c = console("7\n");
        remove_expense(&mut c, &mut storage, &mut SilentFeedback).unwrap();
        assert!(output(c).contains("Error: Transaction ID 7 not found."));

        let mut c = console("1\n");
        remove_expense(&mut c, &mut storage, &mut SilentFeedback).unwrap();
        let text = output(c);
        assert!(text.contains("Deleting expense ID 1 | Food | Lunch | INR 40.0"));
        assert!(text.contains("Expense deleted successfully."));
        assert!(storage.expenses().is_empty());
        assert!(storage.document().position_of(ExpenseId::FIRST).is_none());
    }

    #[test]
    fn test_filter_by_category_selection_handling() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let mut c = console("x\n");
        filter_by_category(&mut c, &storage).unwrap();
        assert!(output(c).contains("Invalid input."));

        let mut c = console("9\n");
        filter_by_category(&mut c, &storage).unwrap();
        assert!(output(c).contains("Invalid category selection."));

        let mut c = console("3\n");
        filter_by_category(&mut c, &storage).unwrap();
        let text = output(c);
        assert!(text.contains("3. Return to Main Menu"));
        assert!(!text.contains("Invalid"));

        let mut c = console("2\n");
        filter_by_category(&mut c, &storage).unwrap();
        assert!(output(c).contains("No transactions found for Transport."));
    }

    #[test]
    fn test_filter_by_date_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let mut c = console("01/05/2024\n");
        filter_by_date(&mut c, &storage).unwrap();
        assert!(output(c).contains("Invalid date format."));

        let mut c = console("2024-01-05\n");
        filter_by_date(&mut c, &storage).unwrap();
        assert!(output(c).contains("No transactions found on this date."));
    }

    #[test]
    fn test_end_of_input_mid_prompt_is_quiet() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = storage(&temp_dir);
        let mut c = console("2024-01-05\n");

        add_expense(&mut c, &mut storage, &mut SilentFeedback).unwrap();
        assert!(storage.expenses().is_empty());
    }
}
