//! Contact Views
//!
//! Text and JSON renderings of contact lists.

use crate::tooling::messages::Messages;
use crate::types::Contact;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{ContentArrangement, Table};

/// Render contacts as a fixed-width table, one row per contact, in input order.
pub fn format_contacts_table(contacts: &[&Contact], messages: &Messages) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec![
            messages.column_name,
            messages.column_surname,
            messages.column_phone,
            messages.column_birthdate,
        ]);
    for contact in contacts {
        table.add_row(vec![
            contact.name.as_str(),
            contact.surname.as_str(),
            contact.phone.as_str(),
            contact
                .birthdate
                .as_deref()
                .unwrap_or(messages.birthdate_unknown),
        ]);
    }
    table.to_string()
}

/// Render contacts as a pretty-printed JSON array.
pub fn format_contacts_json(contacts: &[&Contact]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(contacts)
}
