//! Main panel for the users table: filter controls, the sortable table,
//! the loading indicator, and the scroll-driven fetch trigger.

use chrono::Utc;
use egui::{Color32, Frame, Margin, Response, ScrollArea, Stroke, Ui};
use roster_business::{
    DirectoryConfig, DirectoryState, FetcherHandle, Gender, ScrollMetrics, ScrollMonitor,
    SortConfig, SortKey, UserRecord,
};
use roster_states::StateCtx;

use super::api::{self, fetch_users_page};
use super::table::columns::{self, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_user_row;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Vertical room kept below the table for the loading indicator and the
/// status line.
const FOOTER_HEIGHT: f32 = 56.0;

/// Displays the users panel.
///
/// The rendered table is the derived view: a fresh sort-then-filter
/// projection of the accumulated collection, recomputed every frame. The
/// scroll position of the table feeds the fetch trigger at the end.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        filter_controls(state_ctx, ui);
        ui.add_space(8.0);

        let state = state_ctx.state::<DirectoryState>();
        let view = state.derived_view();
        let sort = state.sort;
        let has_more = state.has_more();
        let is_fetching = state.is_fetching();
        let record_count = state.users().len();
        let last_fetch = state.last_fetch();

        let mut clicked_key: Option<SortKey> = None;

        let table_height = (ui.available_height() - FOOTER_HEIGHT).max(120.0);
        let scroll_output = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .auto_shrink(false)
                    .max_height(table_height)
                    .show(ui, |ui| {
                        clicked_key = render_table(ui, &view, &sort);
                    })
            })
            .inner;

        // Visible exactly while the source may still have records.
        if has_more {
            ui.horizontal(|ui| {
                if is_fetching {
                    ui.spinner();
                }
                ui.label("Loading more users...");
            });
        }
        ui.horizontal(|ui| {
            ui.small(format!("{record_count} records"));
            if let Some(at) = last_fetch {
                ui.small(format!("updated {}", at.format("%H:%M:%S")));
            }
        });

        if let Some(key) = clicked_key {
            state_ctx.state_mut::<DirectoryState>().toggle_sort(key);
        }

        let metrics = ScrollMetrics {
            offset: scroll_output.state.offset.y,
            viewport: scroll_output.inner_rect.height(),
            content: scroll_output.content_size.y,
        };
        if state_ctx.state_mut::<ScrollMonitor>().observe(metrics) {
            request_next_page(state_ctx, ui.ctx().clone());
        }
    });

    response.response
}

/// Renders the table itself; returns the sort key of a clicked header.
fn render_table(ui: &mut Ui, view: &[UserRecord], sort: &SortConfig) -> Option<SortKey> {
    let mut clicked = None;

    let mut builder = egui_extras::TableBuilder::new(ui)
        .vscroll(false)
        .striped(true);
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, sort);
        })
        .body(|body| {
            body.rows(columns::ROW_HEIGHT, view.len(), |mut row| {
                let index = row.index();
                render_user_row(&mut row, &view[index]);
            });
        });

    clicked
}

/// Gender selector and city input, bound straight to the filter criteria.
/// Immediate mode: edits apply on the same frame, no debounce.
fn filter_controls(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let filters = &mut state_ctx.state_mut::<DirectoryState>().filters;

    ui.horizontal(|ui| {
        ui.label("Gender:");
        egui::ComboBox::from_id_salt("gender_filter")
            .selected_text(match filters.gender {
                None => "All",
                Some(Gender::Male) => "Male",
                Some(Gender::Female) => "Female",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.gender, None, "All");
                ui.selectable_value(&mut filters.gender, Some(Gender::Male), "Male");
                ui.selectable_value(&mut filters.gender, Some(Gender::Female), "Female");
            });

        ui.label("City:");
        ui.add(egui::TextEdit::singleline(&mut filters.city).hint_text("city"));
    });
}

/// Claims the next page (when the in-flight guard and has-more allow it)
/// and issues the request.
pub fn request_next_page(state_ctx: &mut StateCtx, ctx: egui::Context) {
    let Some(page) = state_ctx.state_mut::<DirectoryState>().begin_fetch() else {
        return;
    };
    let users_url = state_ctx.state::<DirectoryConfig>().users_url();
    let fetcher = state_ctx.state::<FetcherHandle>().clone();
    fetch_users_page(&fetcher, users_url.as_str(), page, ctx);
}

/// Applies fetch completions parked in temp memory by the background
/// callbacks. Call once per frame, before anything renders the directory.
pub fn poll_users_responses(state_ctx: &mut StateCtx, ctx: &egui::Context) {
    if let Some(users) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<UserRecord>>(egui::Id::new(api::PAGE_RESPONSE_ID))
    }) {
        state_ctx
            .state_mut::<DirectoryState>()
            .apply_page(users, Utc::now());
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<UserRecord>>(egui::Id::new(api::PAGE_RESPONSE_ID));
        });
    }

    if ctx
        .memory(|mem| mem.data.get_temp::<bool>(egui::Id::new(api::PAGE_FAILED_ID)))
        .is_some()
    {
        state_ctx.state_mut::<DirectoryState>().fetch_failed();
        ctx.memory_mut(|mem| {
            mem.data.remove::<bool>(egui::Id::new(api::PAGE_FAILED_ID));
        });
    }
}
