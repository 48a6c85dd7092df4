//! Category display formatting

use crate::models::Categories;

/// Numbered list of categories, starting at 1
pub fn format_category_list(categories: &Categories) -> String {
    let mut output = String::new();
    for (i, name) in categories.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, name));
    }
    output
}

/// Numbered category list followed by the "return" entry used by the filter
pub fn format_category_picker(categories: &Categories) -> String {
    let mut output = format_category_list(categories);
    output.push_str(&format!("{}. Return to Main Menu\n", categories.len() + 1));
    output
}
