//! Display formatting for terminal output
//!
//! Turns models and query results into the text printed by the menu
//! handlers. Nothing here performs I/O.

pub mod about;
pub mod category;
pub mod expense;

pub use about::format_about;
pub use category::{format_category_list, format_category_picker};
pub use expense::{
    format_category_matches, format_date_matches, format_deletion, format_expense_list,
    format_expense_row, format_recorded, SEPARATOR,
};
