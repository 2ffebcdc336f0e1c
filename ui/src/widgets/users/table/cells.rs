//! Cell rendering functions for the users table.

use egui::{RichText, Ui};
use roster_business::UserRecord;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u64) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format!("{id}")).monospace());
    });
}

/// Image decoding is out of scope; the avatar URL renders as a link.
#[inline]
pub fn render_image_cell(ui: &mut Ui, user: &UserRecord) {
    ui.centered_and_justified(|ui| {
        ui.hyperlink_to("photo", &user.image)
            .on_hover_text(user.full_name());
    });
}

#[inline]
pub fn render_full_name_cell(ui: &mut Ui, user: &UserRecord) {
    ui.centered_and_justified(|ui| {
        ui.label(user.full_name());
    });
}

/// The "Demography" column: `age / gender`.
#[inline]
pub fn render_demography_cell(ui: &mut Ui, user: &UserRecord) {
    ui.centered_and_justified(|ui| {
        ui.label(user.demography());
    });
}

#[inline]
pub fn render_designation_cell(ui: &mut Ui, user: &UserRecord) {
    ui.centered_and_justified(|ui| {
        ui.label(&user.company.title);
    });
}

/// The "Location" column: `city, country`.
#[inline]
pub fn render_location_cell(ui: &mut Ui, user: &UserRecord) {
    ui.centered_and_justified(|ui| {
        ui.label(user.location());
    });
}
