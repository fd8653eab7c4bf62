// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer interaction state machine.
//!
//! This module turns raw pointer events into box creation, selection,
//! drag-move, and handle-based resize operations. Exactly one of the four
//! modes is active at any time; pointer-up (and pointer-leave, which callers
//! must report as pointer-up) always returns the session to [`Mode::Idle`].
//!
//! The whole session is one explicit value: every transition takes `&self`
//! and returns the next snapshot, so the machine can be driven and tested
//! without any UI harness.

use super::store::BoxStore;
use crate::models::bbox::{BBox, Handle, Point, MIN_EXTENT};

/// What the pointer went down on, as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Background,
    Box(String),
    Handle(Handle),
}

/// The active interaction mode, together with its gesture-local state.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Idle,
    /// A new box is being stretched out from its anchor corner.
    Drawing { anchor: Point, draft: BBox },
    /// The selected box follows the pointer by incremental deltas.
    Dragging { anchor: Point },
    /// One edge or corner of the selected box tracks the pointer.
    Resizing { handle: Handle },
}

/// One annotation session: the committed boxes plus the in-flight gesture.
///
/// The id counter only ever grows, so ids are never reused after removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub store: BoxStore,
    pub mode: Mode,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: BoxStore::default(),
            mode: Mode::Idle,
            next_id: 1,
        }
    }

    /// Rebuild the session around an imported box list, dropping any
    /// in-flight gesture and selection. The id counter is seeded past every
    /// imported `box-N` id so future allocations cannot collide.
    pub fn with_boxes(&self, boxes: Vec<BBox>) -> Self {
        let next_id = boxes
            .iter()
            .filter_map(|b| b.id.strip_prefix("box-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1)
            .max(self.next_id);

        Self {
            store: BoxStore::new(boxes),
            mode: Mode::Idle,
            next_id,
        }
    }

    /// The in-progress box, present only while drawing.
    pub fn draft(&self) -> Option<&BBox> {
        match &self.mode {
            Mode::Drawing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// Begin a gesture. Priority order: resize handle of the selected box,
    /// then an existing box (select + drag), then background (draw).
    pub fn pointer_down(&self, target: PointerTarget, p: Point) -> Session {
        match target {
            PointerTarget::Handle(handle) if self.store.selected_box().is_some() => Session {
                store: self.store.clone(),
                mode: Mode::Resizing { handle },
                next_id: self.next_id,
            },
            PointerTarget::Box(id) if self.store.find(&id).is_some() => Session {
                store: self.store.select(Some(id)),
                mode: Mode::Dragging { anchor: p },
                next_id: self.next_id,
            },
            _ => {
                let id = format!("box-{}", self.next_id);
                Session {
                    store: self.store.select(None),
                    mode: Mode::Drawing {
                        anchor: p,
                        draft: BBox::new(id, p),
                    },
                    next_id: self.next_id + 1,
                }
            }
        }
    }

    /// Advance the active gesture to the current pointer position.
    pub fn pointer_move(&self, p: Point) -> Session {
        match &self.mode {
            Mode::Idle => self.clone(),
            Mode::Drawing { anchor, draft } => Session {
                store: self.store.clone(),
                mode: Mode::Drawing {
                    anchor: *anchor,
                    draft: draft.stretched(*anchor, p),
                },
                next_id: self.next_id,
            },
            Mode::Dragging { anchor } => {
                let Some(selected) = self.store.selected_box() else {
                    return self.clone();
                };
                let moved = selected.translated(p.x - anchor.x, p.y - anchor.y);
                let id = moved.id.clone();
                Session {
                    store: self.store.replace(&id, moved),
                    // Re-anchor at the pointer so clamping never accumulates
                    // into drift on later moves.
                    mode: Mode::Dragging { anchor: p },
                    next_id: self.next_id,
                }
            }
            Mode::Resizing { handle } => {
                let Some(selected) = self.store.selected_box() else {
                    return self.clone();
                };
                let resized = selected.resized(*handle, p);
                let id = resized.id.clone();
                Session {
                    store: self.store.replace(&id, resized),
                    mode: self.mode.clone(),
                    next_id: self.next_id,
                }
            }
        }
    }

    /// End the gesture. A drawn box is committed only when both extents
    /// exceed the minimum threshold; a plain click leaves no box behind.
    /// Drag and resize results are already live in the store.
    pub fn pointer_up(&self) -> Session {
        let store = match &self.mode {
            Mode::Drawing { draft, .. }
                if draft.width > MIN_EXTENT && draft.height > MIN_EXTENT =>
            {
                log::info!(
                    "Committed box {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
                    draft.id,
                    draft.x,
                    draft.y,
                    draft.width,
                    draft.height
                );
                self.store.add(draft.clone())
            }
            _ => self.store.clone(),
        };

        Session {
            store,
            mode: Mode::Idle,
            next_id: self.next_id,
        }
    }

    /// Double-activation gesture: remove a committed box outright. Operates
    /// directly on the store, independent of the mode machine.
    pub fn remove_box(&self, id: &str) -> Session {
        log::info!("Removed box {id}");
        Session {
            store: self.store.remove(id),
            mode: self.mode.clone(),
            next_id: self.next_id,
        }
    }
}
