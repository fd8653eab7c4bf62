// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and box annotation.
//!
//! This module renders the image with its box overlay and resize handles,
//! hit-tests what sits under the pointer, and forwards pointer gestures to
//! the session as actions. All geometry decisions live in the session; the
//! canvas only maps between screen pixels and percentage space.

use crate::models::bbox::{BBox, Handle, Point};
use crate::session::interaction::{PointerTarget, Session};
use crate::util::geometry::{self, RenderRect};

/// Screen-pixel radius of a resize handle grip.
const HANDLE_RADIUS: f32 = 5.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    PointerDown(PointerTarget, Point),
    PointerMove(Point),
    PointerUp,
    RemoveBox(String),
}

/// Display the canvas area and translate pointer input into actions.
pub fn show(
    ui: &mut egui::Ui,
    session: &Session,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) else {
            show_welcome(ui);
            return;
        };

        // Fit the image into the available space, centered.
        let available = ui.available_size();
        let img_aspect = img_width as f32 / img_height as f32;
        let available_aspect = available.x / available.y;

        let (display_width, display_height) = if img_aspect > available_aspect {
            (available.x, available.x / img_aspect)
        } else {
            (available.y * img_aspect, available.y)
        };

        let x_offset = (available.x - display_width) / 2.0;
        let y_offset = (available.y - display_height) / 2.0;

        let image_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width, display_height),
        );

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // The render rect feeding the coordinate mapper is rebuilt every
        // frame; layout can shift between pointer events.
        let render_rect = RenderRect::new(
            image_rect.min.x,
            image_rect.min.y,
            image_rect.width(),
            image_rect.height(),
        );

        let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());

        if response.double_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = geometry::to_percent(pos.x, pos.y, &render_rect);
                if let PointerTarget::Box(id) = target_at(session, p, pos, &image_rect) {
                    action = CanvasAction::RemoveBox(id);
                }
            }
        } else if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = geometry::to_percent(pos.x, pos.y, &render_rect);
                let target = target_at(session, p, pos, &image_rect);
                action = CanvasAction::PointerDown(target, p);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = geometry::to_percent(pos.x, pos.y, &render_rect);
                action = CanvasAction::PointerMove(p);
            }
        } else if response.drag_stopped() {
            action = CanvasAction::PointerUp;
        } else if !session.is_idle() && !ui.input(|i| i.pointer.any_down()) {
            // Pointer released or left the surface mid-gesture: abandon,
            // never suspend.
            action = CanvasAction::PointerUp;
        }

        // Draw committed boxes, later entries on top.
        let painter = ui.painter();
        for bbox in session.store.boxes() {
            let selected = session.store.selected() == Some(bbox.id.as_str());
            draw_box(painter, bbox, &image_rect, selected);
            if selected {
                draw_handles(painter, bbox, &image_rect);
            }
        }

        // Draw the in-progress box above everything.
        if let Some(draft) = session.draft() {
            draw_box(painter, draft, &image_rect, true);
        }
    });

    action
}

/// Identify what sits under the pointer: a resize handle of the selected
/// box, a committed box (topmost last), or the background.
fn target_at(
    session: &Session,
    p: Point,
    screen_pos: egui::Pos2,
    image_rect: &egui::Rect,
) -> PointerTarget {
    if let Some(selected) = session.store.selected_box() {
        for handle in Handle::ALL {
            let hp = to_screen(image_rect, selected.handle_position(handle));
            if hp.distance(screen_pos) <= HANDLE_RADIUS + 2.0 {
                return PointerTarget::Handle(handle);
            }
        }
    }

    for bbox in session.store.boxes().iter().rev() {
        if bbox.contains(p) {
            return PointerTarget::Box(bbox.id.clone());
        }
    }

    PointerTarget::Background
}

fn to_screen(image_rect: &egui::Rect, p: Point) -> egui::Pos2 {
    egui::pos2(
        image_rect.min.x + (p.x as f32 / 100.0) * image_rect.width(),
        image_rect.min.y + (p.y as f32 / 100.0) * image_rect.height(),
    )
}

fn box_rect(image_rect: &egui::Rect, bbox: &BBox) -> egui::Rect {
    egui::Rect::from_min_max(
        to_screen(image_rect, Point::new(bbox.x, bbox.y)),
        to_screen(image_rect, Point::new(bbox.right(), bbox.bottom())),
    )
}

fn draw_box(painter: &egui::Painter, bbox: &BBox, image_rect: &egui::Rect, selected: bool) {
    let rect = box_rect(image_rect, bbox);
    let (stroke_color, fill_color) = if selected {
        (
            egui::Color32::from_rgb(59, 130, 246),
            egui::Color32::from_rgba_unmultiplied(59, 130, 246, 60),
        )
    } else {
        (
            egui::Color32::from_rgb(239, 68, 68),
            egui::Color32::from_rgba_unmultiplied(239, 68, 68, 60),
        )
    };

    painter.rect(rect, 0.0, fill_color, egui::Stroke::new(2.0, stroke_color));
}

fn draw_handles(painter: &egui::Painter, bbox: &BBox, image_rect: &egui::Rect) {
    for handle in Handle::ALL {
        let pos = to_screen(image_rect, bbox.handle_position(handle));
        painter.circle_filled(pos, HANDLE_RADIUS, egui::Color32::WHITE);
        painter.circle_stroke(
            pos,
            HANDLE_RADIUS,
            egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246)),
        );
    }
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Boxmark")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.label(
                egui::RichText::new("Bounding box annotation for a single image")
                    .size(14.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Enter an image URL above to begin annotating")
                    .color(egui::Color32::from_gray(180)),
            );
        });
    });
}
