use eframe::egui::{self, Color32, FontId, RichText, ScrollArea, TextStyle, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{chart, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(ctx: &egui::Context, config: DashboardConfig) -> Self {
        let legend_size = config.legend_label_size;
        ctx.style_mut(|style| {
            style.text_styles.insert(
                TextStyle::Name(chart::LEGEND_TEXT_STYLE.into()),
                FontId::proportional(legend_size),
            );
        });

        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table + chart, or the load failure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.state.load_error {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(format!("Could not load the dataset.\n\n{err}"))
                            .color(Color32::RED)
                            .size(16.0),
                    );
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    table::points_table(ui, &self.state);
                    ui.add_space(12.0);
                    ui.separator();
                    chart::points_chart(ui, &self.state);
                });
        });
    }
}
