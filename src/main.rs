// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Boxmark - Bounding box annotation tool
//!
//! A desktop application for drawing, moving, and resizing rectangular
//! annotations over a single image, with JSON import/export. Box
//! coordinates are percentages of the rendered image, so annotations stay
//! valid at any display size.

mod app;
mod io;
mod models;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::BoxmarkApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Boxmark - Bounding Box Annotation"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Boxmark",
        options,
        Box::new(|_cc| Ok(Box::new(BoxmarkApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
