// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Trellis grid framework.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use trellis_core::Breakpoint;

/// Top-level Trellis configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to Bootstrap 4 values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrellisConfig {
    /// Grid breakpoint bound tables.
    #[serde(default)]
    pub grid: GridConfig,
}

/// Pixel bounds of one breakpoint. `max` is open at the widest breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Bound {
    /// Lower pixel bound, inclusive. Zero at the narrowest breakpoint.
    pub min: f64,
    /// Upper pixel bound, exclusive. `None` at the widest breakpoint.
    #[serde(default)]
    pub max: Option<f64>,
}

impl Bound {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

/// Bounds for every breakpoint of one container mode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoundTable {
    pub xs: Bound,
    pub sm: Bound,
    pub md: Bound,
    pub lg: Bound,
    pub xl: Bound,
}

impl BoundTable {
    /// Bound of the given breakpoint.
    pub fn get(&self, bp: Breakpoint) -> Bound {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Bounds in canonical narrow-to-wide order, paired with their breakpoint.
    pub fn entries(&self) -> Vec<(Breakpoint, Bound)> {
        Breakpoint::all().into_iter().map(|bp| (bp, self.get(bp))).collect()
    }
}

/// Grid configuration: one bound table per container mode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Viewport bounds used by fluid containers (no maximum width cap).
    #[serde(default = "default_fluid_bounds")]
    pub fluid_bounds: BoundTable,

    /// Container max-width bounds used by fixed-width containers.
    #[serde(default = "default_fixed_bounds")]
    pub default_bounds: BoundTable,
}

impl GridConfig {
    /// The bound table a container consults, depending on its fluid flag.
    pub fn bounds(&self, fluid: bool) -> &BoundTable {
        if fluid {
            &self.fluid_bounds
        } else {
            &self.default_bounds
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            fluid_bounds: default_fluid_bounds(),
            default_bounds: default_fixed_bounds(),
        }
    }
}

/// Bootstrap 4 viewport breakpoints.
fn default_fluid_bounds() -> BoundTable {
    BoundTable {
        xs: Bound::new(0.0, Some(576.0)),
        sm: Bound::new(576.0, Some(768.0)),
        md: Bound::new(768.0, Some(992.0)),
        lg: Bound::new(992.0, Some(1200.0)),
        xl: Bound::new(1200.0, None),
    }
}

/// Bootstrap 4 container max-widths (540/720/960/1140).
fn default_fixed_bounds() -> BoundTable {
    BoundTable {
        xs: Bound::new(0.0, Some(540.0)),
        sm: Bound::new(540.0, Some(720.0)),
        md: Bound::new(720.0, Some(960.0)),
        lg: Bound::new(960.0, Some(1140.0)),
        xl: Bound::new(1140.0, None),
    }
}
