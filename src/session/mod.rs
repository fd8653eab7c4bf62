// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state: committed boxes, selection, and the pointer gesture.

pub mod interaction;
pub mod store;
