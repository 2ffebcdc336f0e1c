//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for a consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const IMAGE_WIDTH: f32 = 60.0;
pub const DEMOGRAPHY_WIDTH: f32 = 110.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in render order:
/// ID, Image, Full Name (flexible), Demography, Designation, Location.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::exact(IMAGE_WIDTH),
        Column::remainder().at_least(120.0), // Full Name - flexible
        Column::exact(DEMOGRAPHY_WIDTH),
        Column::remainder().at_least(100.0), // Designation
        Column::remainder().at_least(120.0), // Location
    ]
}
