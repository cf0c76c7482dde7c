// GUI-subsystem binary on Windows: no console window is allocated.
#![windows_subsystem = "windows"]

use clap::Parser;
use eframe::egui;
use imagebench::app::ImageBenchApp;
use imagebench::cli::CliArgs;
use imagebench::config::AppConfig;
use imagebench::logger;

fn main() -> Result<(), eframe::Error> {
    let args = CliArgs::parse();

    // Session log (overwrites previous session log)
    logger::init(args.log_level());

    let config = AppConfig::from_args(&args);
    log::info!(
        "starting, camera index {}, startup file {:?}",
        config.camera_index,
        config.startup_file
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let title = config.title.clone();
    let result = eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(ImageBenchApp::new(config))),
    );
    if let Err(e) = &result {
        log::error!("event loop exited with error: {e}");
    }
    result
}
