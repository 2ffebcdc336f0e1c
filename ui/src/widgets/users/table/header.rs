//! Table header rendering with sort toggles.

use egui::{RichText, Ui};
use egui_extras::TableRow;
use roster_business::{SortConfig, SortDirection, SortKey};

/// Columns in render order; sortable ones carry their sort key.
const HEADERS: [(&str, Option<SortKey>); 6] = [
    ("ID", Some(SortKey::Id)),
    ("Image", None),
    ("Full Name", Some(SortKey::FirstName)),
    ("Demography", Some(SortKey::Age)),
    ("Designation", None),
    ("Location", None),
];

/// Renders the header row. Returns the sort key of a clicked column, if any.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: &SortConfig) -> Option<SortKey> {
    let mut clicked = None;
    for (label, key) in HEADERS {
        header.col(|ui| match key {
            Some(key) => {
                if render_sortable_header_cell(ui, label, key, sort) {
                    clicked = Some(key);
                }
            }
            None => render_header_cell(ui, label),
        });
    }
    clicked
}

/// Renders a plain (non-sortable) header cell.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}

/// Sortable headers are buttons; the active column shows its direction.
/// Returns `true` when clicked.
#[inline]
fn render_sortable_header_cell(ui: &mut Ui, label: &str, key: SortKey, sort: &SortConfig) -> bool {
    let text = if sort.key == key {
        match sort.direction {
            SortDirection::Ascending => format!("{label} ▲"),
            SortDirection::Descending => format!("{label} ▼"),
        }
    } else {
        label.to_owned()
    };

    ui.centered_and_justified(|ui| ui.button(RichText::new(text).strong()).clicked())
        .inner
}
