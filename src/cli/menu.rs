//! Main menu loop
//!
//! Prints the menu, reads a choice, dispatches to the matching handler and
//! repeats until the user picks "8" or input runs out.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::ExpenseResult;
use crate::storage::Storage;

use super::console::Console;
use super::feedback::Feedback;
use super::handlers;

/// Menu text shown before every choice
pub const MENU_TEXT: &str = "\nWelcome to Smart Expense Tracker!\n\
=== MAIN MENU ===\n\
1. Add Expense\n\
2. Remove Expense\n\
3. View All Expenses\n\
4. Filter by Category\n\
5. Filter by Date\n\
6. View All Categories\n\
7. About this Project\n\
8. Exit\n";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    RemoveExpense,
    ViewAll,
    FilterByCategory,
    FilterByDate,
    ViewCategories,
    About,
    Exit,
}

impl MenuChoice {
    /// Exact match against "1" through "8"; anything else is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::RemoveExpense),
            "3" => Some(Self::ViewAll),
            "4" => Some(Self::FilterByCategory),
            "5" => Some(Self::FilterByDate),
            "6" => Some(Self::ViewCategories),
            "7" => Some(Self::About),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the interactive session until exit
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &mut Storage,
    feedback: &mut dyn Feedback,
) -> ExpenseResult<()> {
    loop {
        console.line(MENU_TEXT)?;

        let Some(input) = console.prompt("Enter your choice (1-8): ")? else {
            debug!("Input closed, leaving menu");
            console.line("Goodbye!")?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.line("Invalid selection. Please try again.")?;
            continue;
        };

        debug!(?choice, "Menu selection");

        let outcome = match choice {
            MenuChoice::AddExpense => handlers::add_expense(console, storage, feedback),
            MenuChoice::RemoveExpense => handlers::remove_expense(console, storage, feedback),
            MenuChoice::ViewAll => handlers::view_all(console, storage, feedback),
            MenuChoice::FilterByCategory => handlers::filter_by_category(console, storage),
            MenuChoice::FilterByDate => handlers::filter_by_date(console, storage),
            MenuChoice::ViewCategories => handlers::view_categories(console, storage),
            MenuChoice::About => handlers::about(console, storage),
            MenuChoice::Exit => {
                console.line("Goodbye!")?;
                return Ok(());
            }
        };

        if let Err(e) = outcome {
            if e.is_fatal() {
                return Err(e);
            }
            warn!(error = %e, ?choice, "Menu action failed");
            console.line(format!("Error: {}", e))?;
        }
    }
}
