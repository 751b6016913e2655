// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Container, row, and column layout plugins for the Trellis grid
//! framework.
//!
//! The container selects the active breakpoints, the row fans out into
//! column children, and the column synthesizes four configuration fields
//! per selected breakpoint. Everything reads and writes the glossary blob
//! the host persists.

pub mod column;
pub mod container;
pub mod range;
pub mod row;

pub use column::{ColumnPlugin, COLUMN};
pub use container::{ContainerPlugin, CONTAINER};
pub use range::{resolve, DeviceRange, DeviceScope};
pub use row::{RowPlugin, ROW};

use trellis_config::GridConfig;
use trellis_plugin::PluginRegistry;

/// Register the three grid plugins against a bound-table configuration.
pub fn register_grid_plugins(registry: &mut PluginRegistry, config: &GridConfig) {
    registry.register(Box::new(ContainerPlugin::new(config)));
    registry.register(Box::new(RowPlugin));
    registry.register(Box::new(ColumnPlugin::new(config)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::LayoutPlugin;

    #[test]
    fn registration_wires_all_three_plugins() {
        let mut registry = PluginRegistry::new();
        register_grid_plugins(&mut registry, &GridConfig::default());
        assert_eq!(registry.len(), 3);
        let names: Vec<&str> = registry.list_all().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec![COLUMN, CONTAINER, ROW]);
    }

    #[test]
    fn placement_rules_match_the_grid_hierarchy() {
        let mut registry = PluginRegistry::new();
        register_grid_plugins(&mut registry, &GridConfig::default());

        assert!(registry.validate_parent(CONTAINER, None).is_ok());
        assert!(registry.validate_parent(ROW, Some(CONTAINER)).is_ok());
        assert!(registry.validate_parent(ROW, Some(COLUMN)).is_ok());
        assert!(registry.validate_parent(COLUMN, Some(ROW)).is_ok());
        assert!(registry.validate_parent(COLUMN, Some(CONTAINER)).is_err());
        assert!(registry.validate_parent(COLUMN, None).is_err());
    }
}
