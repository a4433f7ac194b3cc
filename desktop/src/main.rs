mod app;
mod charts;
mod feedback;
mod storage;

use app::QuizApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Multiplication Practice",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
    )
}
