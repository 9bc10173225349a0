use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

/// Render the wide table: one row per age, one column per position.
///
/// Age is drawn as a plain text label, the averages right-aligned with two
/// decimals.
pub fn points_table(ui: &mut Ui, state: &AppState) {
    let table = &state.view.table;

    if table.is_empty() {
        ui.label("No players match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .id_salt("points_table")
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(48.0))
        .columns(Column::remainder().at_least(56.0), table.column_count())
        .max_scroll_height(260.0)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("Age");
            });
            for pos in table.positions() {
                header.col(|ui| {
                    ui.strong(pos.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.row_count(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.label(table.ages()[i].to_string());
                });
                for col in 0..table.column_count() {
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let players = table.stats(i, col).map_or(0, |s| s.count);
                            ui.label(format!("{:.2}", table.value(i, col)))
                                .on_hover_text(format!("{players} player(s)"));
                        });
                    });
                }
            });
        });
}
