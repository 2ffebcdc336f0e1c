//! Table rendering for the users panel, split into focused pieces:
//! - `columns`: column definitions and widths
//! - `header`: header rendering with sort toggles
//! - `row`: one user row
//! - `cells`: cell rendering per column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;
