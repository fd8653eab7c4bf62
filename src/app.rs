// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the annotation session, the image texture, and the
//! configuration text mirror, and coordinates between the canvas, the
//! config panel, and the background loaders.

use crate::io::{media, media::LoadedImage, serialization};
use crate::models::config::ImageConfig;
use crate::session::interaction::Session;
use crate::ui::{canvas, config_panel};
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct BoxmarkApp {
    /// Committed boxes, selection, and the in-flight pointer gesture
    session: Session,

    /// Image source currently applied to the session
    image_url: String,

    /// URL field contents, applied on Enter or focus loss
    url_input: String,

    /// JSON mirror of the current configuration, also user-editable
    config_text: String,

    /// User-visible error from the last failed load or parse
    error: Option<String>,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Receiver for background config-file import
    config_loader: Option<Receiver<Result<ImageConfig, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl Default for BoxmarkApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxmarkApp {
    /// Create a new Boxmark application instance.
    pub fn new() -> Self {
        let mut app = Self {
            session: Session::new(),
            image_url: String::new(),
            url_input: String::new(),
            config_text: String::new(),
            error: None,
            image_texture: None,
            image_size: None,
            image_loader: None,
            config_loader: None,
            loading_message: None,
        };
        app.sync_config_text();
        app
    }

    /// Current configuration as a value: applied URL plus committed boxes.
    fn current_config(&self) -> ImageConfig {
        ImageConfig {
            image_url: self.image_url.clone(),
            boxes: self.session.store.boxes().to_vec(),
        }
    }

    /// Refresh the JSON mirror after the session or URL changed outside the
    /// text editor itself.
    fn sync_config_text(&mut self) {
        match serialization::to_json(&self.current_config()) {
            Ok(json) => self.config_text = json,
            Err(e) => log::error!("Failed to serialize configuration: {e}"),
        }
    }

    /// Start fetching the image on a background thread.
    fn load_image_source(&mut self, source: String) {
        if source.is_empty() {
            self.image_texture = None;
            self.image_size = None;
            return;
        }

        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        std::thread::spawn(move || {
            let result = media::load_image(&source).map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    /// Start importing a configuration file on a background thread. The
    /// parsed config is applied atomically once the read completes.
    fn import_config(&mut self, path: std::path::PathBuf) {
        let (sender, receiver) = channel();
        self.config_loader = Some(receiver);
        self.loading_message = Some("Loading configuration...".to_string());

        std::thread::spawn(move || {
            let result = serialization::import_json(&path).map_err(|e| e.to_string());
            let _ = sender.send(result);
        });
    }

    /// Write the current configuration to a file and refresh the mirror.
    fn export_config(&mut self, path: std::path::PathBuf) {
        let config = self.current_config();
        match serialization::export_json(&config, &path) {
            Ok(()) => {
                self.sync_config_text();
                log::info!("Exported configuration to {}", path.display());
            }
            Err(e) => {
                self.error = Some(format!("Failed to export configuration: {e}"));
                log::error!("Failed to export configuration: {e}");
            }
        }
    }

    /// Replace the whole session from a parsed configuration. Atomic: url
    /// and box list change together, and a new image load begins.
    fn apply_config(&mut self, config: ImageConfig) {
        self.session = self.session.with_boxes(config.boxes);
        self.image_url = config.image_url;
        self.url_input = self.image_url.clone();
        self.error = None;
        self.sync_config_text();
        self.load_image_source(self.image_url.clone());
        log::info!(
            "Applied configuration: {} boxes, url {:?}",
            self.session.store.boxes().len(),
            self.image_url
        );
    }

    /// Re-parse the user-edited JSON text. Success replaces the session;
    /// failure keeps prior state (and the user's text) and shows an error.
    fn apply_config_text(&mut self) {
        match serialization::from_json(&self.config_text) {
            Ok(config) => {
                let url_changed = config.image_url != self.image_url;
                self.session = self.session.with_boxes(config.boxes);
                self.image_url = config.image_url;
                self.url_input = self.image_url.clone();
                self.error = None;
                if url_changed {
                    self.load_image_source(self.image_url.clone());
                }
            }
            Err(e) => {
                self.error = Some(format!("Invalid configuration: {e}"));
            }
        }
    }

    fn poll_loaders(&mut self, ctx: &egui::Context) {
        if let Some(ref receiver) = self.config_loader {
            if let Ok(result) = receiver.try_recv() {
                self.config_loader = None;
                self.loading_message = None;

                match result {
                    Ok(config) => self.apply_config(config),
                    Err(e) => {
                        // Prior state stays untouched on a bad import.
                        self.error = Some(format!("Failed to import configuration: {e}"));
                        log::error!("Failed to import configuration: {e}");
                    }
                }
            }
        }

        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                self.loading_message = None;

                let loaded = match result {
                    Ok(img) => {
                        self.error = None;
                        log::info!("Loaded image ({}x{})", img.width, img.height);
                        img
                    }
                    Err(e) => {
                        // The boxes survive a failed load; only the backdrop
                        // becomes a placeholder.
                        self.error = Some(format!("Failed to load image: {e}"));
                        log::error!("Failed to load image: {e}");
                        media::placeholder()
                    }
                };

                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                let texture =
                    ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);
                self.image_texture = Some(texture);
                self.image_size = Some((loaded.width, loaded.height));
            }
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Image URL:");

            let url_response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input).desired_width(320.0),
            );
            // Fetch on Enter or focus loss, not per keystroke.
            if url_response.lost_focus() && self.url_input != self.image_url {
                self.image_url = self.url_input.clone();
                self.sync_config_text();
                self.load_image_source(self.image_url.clone());
            }

            ui.separator();

            let can_export = !self.image_url.is_empty()
                && !self.session.store.boxes().is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export..."))
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("image-config.json")
                    .save_file()
                {
                    self.export_config(path);
                }
            }

            if ui.button("Import...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    self.import_config(path);
                }
            }
        });

        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::from_rgb(239, 68, 68), error);
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.image_url.is_empty() {
                ui.label("No image URL set");
            } else {
                ui.label(format!("URL: {}", self.image_url));
            }
            ui.separator();
            ui.label(format!("Boxes: {}", self.session.store.boxes().len()));
            if let Some(id) = self.session.store.selected() {
                ui.separator();
                ui.label(format!("Selected: {id}"));
            }
        });
    }
}

impl eframe::App for BoxmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loaders(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        let panel_action = egui::TopBottomPanel::bottom("config_panel")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| config_panel::show(ui, &mut self.config_text))
            .inner;

        if let config_panel::PanelAction::ConfigEdited = panel_action {
            self.apply_config_text();
        }

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    let action =
                        canvas::show(ui, &self.session, &self.image_texture, self.image_size);
                    self.show_status(ui);
                    action
                }
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::PointerDown(target, p) => {
                self.session = self.session.pointer_down(target, p);
            }
            canvas::CanvasAction::PointerMove(p) => {
                self.session = self.session.pointer_move(p);
            }
            canvas::CanvasAction::PointerUp => {
                self.session = self.session.pointer_up();
                self.sync_config_text();
            }
            canvas::CanvasAction::RemoveBox(id) => {
                // The removal gesture ends whatever gesture the first click
                // of the double-click started.
                self.session = self.session.remove_box(&id).pointer_up();
                self.sync_config_text();
            }
            canvas::CanvasAction::None => {}
        }
    }
}
