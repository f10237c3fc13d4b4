use eframe::egui;
use pinned_notes::gui::PinnedNotesApp;
use pinned_notes::logging;
use pinned_notes::settings::{Settings, SETTINGS_FILE};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let app = PinnedNotesApp::new(settings)?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 420.0])
            .with_min_inner_size([360.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pinned notes",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to start ui: {e}"))
}
