// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Boxmark application.

pub mod canvas;
pub mod config_panel;
