use eframe::egui::{RichText, TextStyle, Ui};
use egui_plot::{uniform_grid_spacer, Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

/// Text style registered at startup for legend entries.
pub const LEGEND_TEXT_STYLE: &str = "legend";

// ---------------------------------------------------------------------------
// Average points line chart (central panel)
// ---------------------------------------------------------------------------

/// Render one line per position, average points against age.
///
/// Age is a nominal axis: each distinct age gets an evenly spaced slot
/// regardless of the gap to its neighbours, and ticks show the age itself.
pub fn points_chart(ui: &mut Ui, state: &AppState) {
    let series = &state.view.series;
    let cfg = &state.config;
    let labels = series.age_labels();

    if series.is_empty() {
        ui.weak("Nothing to plot.");
    }

    let tick_labels = labels.clone();
    let hover_labels = labels.clone();

    Plot::new("points_by_age")
        .height(cfg.chart_height)
        .width(ui.available_width())
        .legend(Legend::default().text_style(TextStyle::Name(LEGEND_TEXT_STYLE.into())))
        .x_axis_label(RichText::new("Age").size(cfg.axis_title_size))
        .y_axis_label(RichText::new("Average Points").size(cfg.axis_title_size))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| tick_label(&tick_labels, mark.value))
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return String::new();
            }
            format!(
                "{name}\nAge {}\n{:.2} pts",
                tick_label(&hover_labels, value.x),
                value.y
            )
        })
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (pos, points) in series.lines() {
                let coords: PlotPoints = points
                    .iter()
                    .filter_map(|p| {
                        let slot = labels.binary_search(&p.age).ok()?;
                        Some([slot as f64, p.average_points])
                    })
                    .collect();

                let line = Line::new(coords)
                    .name(pos.as_str())
                    .color(state.colors.color_for(pos))
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}

/// Age label for an x-axis slot, empty between slots and outside the data.
fn tick_label(labels: &[u32], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels
        .get(slot as usize)
        .map(|age| age.to_string())
        .unwrap_or_default()
}
