// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./trellis.toml` > `~/.config/trellis/trellis.toml`
//! > `/etc/trellis/trellis.toml` with environment variable overrides via the
//! `TRELLIS_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TrellisConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled Bootstrap 4 defaults
/// 2. `/etc/trellis/trellis.toml` (system-wide)
/// 3. `~/.config/trellis/trellis.toml` (user XDG config)
/// 4. `./trellis.toml` (local directory)
/// 5. `TRELLIS_*` environment variables
pub fn load_config() -> Result<TrellisConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<TrellisConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrellisConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TrellisConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrellisConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TrellisConfig::default()))
        .merge(Toml::file("/etc/trellis/trellis.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("trellis/trellis.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("trellis.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores stay intact: `TRELLIS_GRID_FLUID_BOUNDS` must map to
/// `grid.fluid_bounds`, not `grid.fluid.bounds`.
fn env_provider() -> Env {
    Env::prefixed("TRELLIS_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let mapped = key.as_str().replacen("grid_", "grid.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = load_config_from_str("").expect("empty TOML should use defaults");
        assert_eq!(config.grid, crate::model::GridConfig::default());
    }

    #[test]
    fn partial_grid_section_overrides_one_table() {
        let toml = r#"
[grid.fluid_bounds]
xs = { min = 0.0, max = 600.0 }
sm = { min = 600.0, max = 800.0 }
md = { min = 800.0, max = 1000.0 }
lg = { min = 1000.0, max = 1300.0 }
xl = { min = 1300.0 }
"#;
        let config = load_config_from_str(toml).expect("valid TOML should deserialize");
        assert_eq!(config.grid.fluid_bounds.xs.max, Some(600.0));
        assert_eq!(config.grid.fluid_bounds.xl.max, None);
        // The other table keeps compiled defaults.
        assert_eq!(config.grid.default_bounds.xs.max, Some(540.0));
    }

    #[test]
    fn unknown_grid_key_is_rejected() {
        let toml = r#"
[grid]
flud_bounds = {}
"#;
        let err = load_config_from_str(toml).expect_err("should reject unknown field");
        let err_str = format!("{err}");
        assert!(
            err_str.contains("unknown field") || err_str.contains("flud_bounds"),
            "error should mention unknown field, got: {err_str}"
        );
    }
}
