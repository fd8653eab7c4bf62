// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Committed box collection and selection.
//!
//! The store owns the ordered list of committed boxes plus the id of the
//! selected box, if any. Every mutation returns a fresh snapshot instead of
//! editing in place, so callers can detect change by value comparison and
//! unit tests never need a rendering surface.

use crate::models::bbox::BBox;

/// Ordered collection of committed boxes with at most one selected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxStore {
    boxes: Vec<BBox>,
    selected: Option<String>,
}

impl BoxStore {
    pub fn new(boxes: Vec<BBox>) -> Self {
        Self {
            boxes,
            selected: None,
        }
    }

    /// Committed boxes, in insertion order.
    pub fn boxes(&self) -> &[BBox] {
        &self.boxes
    }

    /// Id of the selected box, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected box itself, if a selection exists and still resolves.
    pub fn selected_box(&self) -> Option<&BBox> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    pub fn find(&self, id: &str) -> Option<&BBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Append a box at the end of the collection.
    pub fn add(&self, bbox: BBox) -> Self {
        let mut next = self.clone();
        next.boxes.push(bbox);
        next
    }

    /// Replace the box with the given id. No-op if the id is absent.
    pub fn replace(&self, id: &str, bbox: BBox) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.boxes.iter_mut().find(|b| b.id == id) {
            *slot = bbox;
        }
        next
    }

    /// Remove the box with the given id, clearing the selection if it
    /// pointed at the removed box.
    pub fn remove(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.boxes.retain(|b| b.id != id);
        if next.selected.as_deref() == Some(id) {
            next.selected = None;
        }
        next
    }

    pub fn select(&self, id: Option<String>) -> Self {
        let mut next = self.clone();
        next.selected = id;
        next
    }
}
