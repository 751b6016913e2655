// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Trellis grid plugin framework.
//!
//! This crate provides the breakpoint enumeration, the glossary blob, the
//! declarative form field descriptors, and the `LayoutPlugin` trait that all
//! grid plugins implement. The host CMS renders the forms and persists the
//! glossary; everything here is plain data plus one synchronous trait.

pub mod breakpoint;
pub mod error;
pub mod fields;
pub mod glossary;
pub mod traits;

// Re-export key items at crate root for ergonomic imports.
pub use breakpoint::Breakpoint;
pub use error::TrellisError;
pub use fields::{Choice, FormField, Widget};
pub use glossary::{Glossary, BREAKPOINTS_KEY, FLUID_KEY};
pub use traits::{ChildPlan, LayoutContext, LayoutPlugin};
