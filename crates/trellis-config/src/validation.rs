// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for grid bound tables.
//!
//! Validates semantic constraints that serde attributes cannot express:
//! bounds must be non-negative, internally consistent (min < max), and
//! contiguous from one breakpoint to the next.

use trellis_core::Breakpoint;

use crate::diagnostic::ConfigError;
use crate::model::{BoundTable, TrellisConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TrellisConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    validate_table(&config.grid.fluid_bounds, "grid.fluid_bounds", &mut errors);
    validate_table(&config.grid.default_bounds, "grid.default_bounds", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_table(table: &BoundTable, section: &str, errors: &mut Vec<ConfigError>) {
    let entries = table.entries();
    let widest = Breakpoint::Xl;

    for (bp, bound) in &entries {
        if bound.min < 0.0 {
            errors.push(ConfigError::Validation {
                message: format!("{section}.{bp}.min must be non-negative, got {}", bound.min),
            });
        }

        match bound.max {
            Some(max) if max <= bound.min => {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "{section}.{bp}.max ({max}) must be greater than min ({})",
                        bound.min
                    ),
                });
            }
            None if *bp != widest => {
                errors.push(ConfigError::Validation {
                    message: format!("{section}.{bp}.max is required below the widest breakpoint"),
                });
            }
            _ => {}
        }
    }

    // Adjacent breakpoints must tile the pixel axis without gaps or overlap.
    for pair in entries.windows(2) {
        let (narrow_bp, narrow) = pair[0];
        let (wide_bp, wide) = pair[1];
        if let Some(max) = narrow.max
            && max != wide.min
        {
            errors.push(ConfigError::Validation {
                message: format!(
                    "{section}: {narrow_bp}.max ({max}) must equal {wide_bp}.min ({})",
                    wide.min
                ),
            });
        }
    }
}
