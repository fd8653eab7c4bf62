// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for boxes and annotation configurations.

pub mod bbox;
pub mod config;
