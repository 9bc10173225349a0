use eframe::egui;

use nba_dashboard::app::DashboardApp;
use nba_dashboard::ui::panels::PAGE_TITLE;
use nba_dashboard::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PAGE_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(&cc.egui_ctx, config)))),
    )
}
