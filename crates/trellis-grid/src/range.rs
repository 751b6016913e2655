// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Breakpoint range resolution for per-breakpoint help text.
//!
//! A column field configured for one selected breakpoint actually covers
//! every device from that breakpoint up to (but excluding) the next selected
//! one. The resolver computes that device list and how the field's help text
//! should be scoped in pixels.

use trellis_config::BoundTable;
use trellis_core::Breakpoint;

/// Pixel scope of a per-breakpoint field's help text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceScope {
    /// The selection continues with a wider breakpoint.
    NarrowerThan(f64),
    /// Widest of several selected breakpoints.
    WiderThan(f64),
    /// Sole selected breakpoint; spans every device.
    AllDevices,
}

/// Resolved device coverage of one selected breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRange {
    /// Every breakpoint the field covers, narrow to wide.
    pub devices: Vec<Breakpoint>,
    /// Help-text scope in pixels.
    pub scope: DeviceScope,
}

impl DeviceRange {
    /// Comma-separated device labels, for field labels.
    pub fn device_labels(&self) -> String {
        self.devices
            .iter()
            .map(|bp| bp.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Full help sentence for a field, e.g.
    /// `"Column width for devices narrower than 768 pixels."`.
    pub fn help_text(&self, subject: &str) -> String {
        match self.scope {
            DeviceScope::NarrowerThan(px) => {
                format!("{subject} for devices narrower than {px:.0} pixels.")
            }
            DeviceScope::WiderThan(px) => {
                format!("{subject} for devices wider than {px:.0} pixels.")
            }
            DeviceScope::AllDevices => format!("{subject} for all devices."),
        }
    }
}

/// Resolve device coverage for `selected[index]`.
///
/// `selected` must be in canonical narrow-to-wide order (as produced by
/// `Glossary::breakpoints`). The field covers every breakpoint from the
/// target up to the next selected one; an open end runs through the widest.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `selected`.
pub fn resolve(selected: &[Breakpoint], index: usize, bounds: &BoundTable) -> DeviceRange {
    let target = selected[index];
    let next = selected.get(index + 1).copied();
    let devices = Breakpoint::range(target, next);

    let scope = if let Some(next) = next {
        // The phrased limit is the next selected breakpoint's own upper
        // bound. The widest breakpoint is open above; its lower bound caps
        // the phrase instead.
        let bound = bounds.get(next);
        DeviceScope::NarrowerThan(bound.max.unwrap_or(bound.min))
    } else if selected.len() > 1 {
        DeviceScope::WiderThan(bounds.get(target).min)
    } else {
        DeviceScope::AllDevices
    };

    DeviceRange { devices, scope }
}
