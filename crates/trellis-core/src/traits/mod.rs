// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for layout plugins and their tree context.

pub mod plugin;

pub use plugin::{ChildPlan, LayoutContext, LayoutPlugin};
