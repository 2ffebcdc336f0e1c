use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fetch completions parked by background callbacks before
        // anything reads the directory state this frame.
        widgets::poll_users_responses(&mut self.state.ctx, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Employees");
            ui.separator();
            widgets::users_panel(&mut self.state.ctx, ui);
        });
    }
}
