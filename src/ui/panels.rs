use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

pub const PAGE_TITLE: &str = "🏀 NBA Players Dataset";

const DESCRIPTION: &str = "This app visualizes player statistics from the NBA dataset. \
    You can explore player performance based on their positions and ages!";

// ---------------------------------------------------------------------------
// Top bar – title and description
// ---------------------------------------------------------------------------

/// Render the page header.
pub fn header(ui: &mut Ui, state: &AppState) {
    ui.add_space(6.0);
    ui.heading(RichText::new(PAGE_TITLE).size(26.0).strong());
    ui.label(DESCRIPTION);

    ui.horizontal(|ui: &mut Ui| {
        if let Some(ds) = &state.dataset {
            let span = ds
                .age_bounds()
                .map(|(lo, hi)| format!(", ages {lo}–{hi}"))
                .unwrap_or_default();
            ui.label(format!(
                "{} players loaded{span} · {} ages × {} positions shown",
                ds.len(),
                state.view.table.row_count(),
                state.view.table.column_count()
            ));
        }
        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.add_enabled_ui(false, |ui: &mut Ui| {
            ui.label("No dataset loaded.");
        });
        return;
    };

    // ---- Position multiselect ----
    ui.strong("Select Positions:");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    for pos in dataset.positions() {
        let mut checked = state.criteria.positions.contains(pos);
        let text = RichText::new(pos.as_str()).color(state.colors.color_for(pos));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_position(pos);
        }
    }

    ui.separator();

    // ---- Age range ----
    ui.strong("Select Age Range:");
    let (lo, hi) = state.config.age_slider;

    let mut min_age = state.criteria.ages.min;
    if ui
        .add(egui::Slider::new(&mut min_age, lo..=hi).text("from"))
        .changed()
    {
        state.set_min_age(min_age);
    }

    let mut max_age = state.criteria.ages.max;
    if ui
        .add(egui::Slider::new(&mut max_age, lo..=hi).text("to"))
        .changed()
    {
        state.set_max_age(max_age);
    }

    ui.label(format!(
        "{} – {}",
        state.criteria.ages.min, state.criteria.ages.max
    ));
}
