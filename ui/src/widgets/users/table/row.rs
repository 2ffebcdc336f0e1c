//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::UserRecord;

use super::cells::{
    render_demography_cell, render_designation_cell, render_full_name_cell, render_id_cell,
    render_image_cell, render_location_cell,
};

/// Renders one user row: ID, image link, full name, demography,
/// designation, location.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) {
    row.col(|ui| render_id_cell(ui, user.id));
    row.col(|ui| render_image_cell(ui, user));
    row.col(|ui| render_full_name_cell(ui, user));
    row.col(|ui| render_demography_cell(ui, user));
    row.col(|ui| render_designation_cell(ui, user));
    row.col(|ui| render_location_cell(ui, user));
}
