// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use nt_shop::gui;

fn main() {
    // Optional: a saved bootstrap JSON to inspect offline.
    let snapshot = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_always_on_top(),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, snapshot) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
