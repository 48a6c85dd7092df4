//! Expense display formatting
//!
//! Renders expense records, filter results and delete confirmations as
//! console text.

use crate::models::{format_amount, Expense};
use crate::services::FilteredExpenses;

/// Horizontal rule printed after listings
pub const SEPARATOR: &str = "------------------------------";

/// Format a single expense for the full listing
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "Txn ID: {} | Date: {} | Category: {} | Amount: {}",
        expense.id,
        expense.date,
        expense.category,
        format_amount(expense.amount)
    )
}

/// Format every expense, each followed by a separator
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
        output.push_str(SEPARATOR);
        output.push('\n');
    }
    output
}

/// Format the expenses of one category with their total
pub fn format_category_matches(category: &str, result: &FilteredExpenses) -> String {
    if result.is_empty() {
        return format!("No transactions found for {}.\n", category);
    }

    let mut output = String::new();
    for expense in &result.expenses {
        output.push_str(&format!(
            "Txn ID: {} | Date: {} | {} | Amount: {}\n",
            expense.id,
            expense.date,
            expense.description,
            format_amount(expense.amount)
        ));
    }
    push_total(&mut output, category, result.total);
    output
}

/// Format the expenses of one day with their total
pub fn format_date_matches(date: &str, result: &FilteredExpenses) -> String {
    if result.is_empty() {
        return "No transactions found on this date.\n".to_string();
    }

    let mut output = String::new();
    for expense in &result.expenses {
        output.push_str(&format!(
            "Txn ID: {} | Category: {} | Amount: {}\n",
            expense.id,
            expense.category,
            format_amount(expense.amount)
        ));
    }
    push_total(&mut output, date, result.total);
    output
}

fn push_total(output: &mut String, label: &str, total: f64) {
    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!("Total spent on {}: {}\n", label, format_amount(total)));
}

/// Line echoed before an expense is deleted
pub fn format_deletion(expense: &Expense, currency: &str) -> String {
    format!(
        "Deleting expense ID {} | {} | {} | {} {}",
        expense.id,
        expense.category,
        expense.description,
        currency,
        format_amount(expense.amount)
    )
}

/// Summary of a freshly recorded expense
pub fn format_recorded(expense: &Expense) -> String {
    format!(
        "Txn ID: {} | Date: {} | Category: {} | {} | Amount: {}",
        expense.id,
        expense.date,
        expense.category,
        expense.description,
        format_amount(expense.amount)
    )
}
