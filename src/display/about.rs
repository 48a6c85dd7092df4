//! Project information block

use crate::models::Metadata;

/// Format the document metadata
pub fn format_about(metadata: &Metadata) -> String {
    format!(
        "About This Project\nCurrency: {}\nCreated By: {}\nCreated On: {}\nLast Updated: {}\n",
        metadata.currency, metadata.created_by, metadata.created_on, metadata.last_updated
    )
}
