//! Renju desktop board

use clap::Parser;

use renju::cli::GuiArgs;
use renju::logging;
use renju::ui::RenjuApp;
use renju::IllegalMovePolicy;

fn main() -> anyhow::Result<()> {
    let args = GuiArgs::parse();
    logging::init(None)?;
    let policy: IllegalMovePolicy = args.policy.into();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(move |cc| Ok(Box::new(RenjuApp::new(cc, policy)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the window: {e}"))
}
