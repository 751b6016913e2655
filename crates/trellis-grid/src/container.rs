// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The container plugin: breakpoint selection and the fluid flag.

use serde_json::json;
use trellis_config::{BoundTable, GridConfig};
use trellis_core::{
    Breakpoint, Choice, FormField, Glossary, LayoutContext, LayoutPlugin, TrellisError, Widget,
    BREAKPOINTS_KEY, FLUID_KEY,
};

/// Registry name of the container plugin.
pub const CONTAINER: &str = "container";

/// The outermost grid plugin. Editors pick which breakpoints the grid
/// supports and whether the container is fluid.
pub struct ContainerPlugin {
    fluid_bounds: BoundTable,
}

impl ContainerPlugin {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            fluid_bounds: config.fluid_bounds.clone(),
        }
    }
}

/// Choice list for the breakpoint multi-select: one entry per breakpoint,
/// labelled with its pixel range.
fn breakpoint_choices(bounds: &BoundTable) -> Vec<Choice> {
    let entries = bounds.entries();
    let last = entries.len() - 1;
    entries
        .iter()
        .enumerate()
        .map(|(index, (bp, bound))| {
            let label = if index == 0 {
                format!("{} (<{:.0}px)", bp.label(), bound.max.unwrap_or(bound.min))
            } else if index == last {
                format!("{} (\u{2265}{:.0}px)", bp.label(), bound.min)
            } else {
                format!(
                    "{} (\u{2265}{:.0}px and <{:.0}px)",
                    bp.label(),
                    bound.min,
                    bound.max.unwrap_or(bound.min)
                )
            };
            Choice::new(bp.to_string(), label)
        })
        .collect()
}

impl LayoutPlugin for ContainerPlugin {
    fn name(&self) -> &'static str {
        CONTAINER
    }

    fn require_parent(&self) -> bool {
        false
    }

    fn form(&self, _ctx: &dyn LayoutContext) -> Result<Vec<FormField>, TrellisError> {
        let all_names: Vec<String> = Breakpoint::all().iter().map(|bp| bp.to_string()).collect();
        Ok(vec![
            FormField {
                name: BREAKPOINTS_KEY.to_string(),
                label: "Available Breakpoints".to_string(),
                help_text: "Supported display widths for the grid system.".to_string(),
                initial: Some(json!(all_names)),
                widget: Widget::MultiCheckbox {
                    choices: breakpoint_choices(&self.fluid_bounds),
                },
            },
            FormField {
                name: FLUID_KEY.to_string(),
                label: "Fluid Container".to_string(),
                help_text: "Changing your outermost '.container' to '.container-fluid'."
                    .to_string(),
                initial: Some(json!(false)),
                widget: Widget::CheckboxInput,
            },
        ])
    }

    fn clean(&self, values: &Glossary) -> Result<(), TrellisError> {
        if values.breakpoints().is_empty() {
            return Err(TrellisError::validation(
                "At least one breakpoint must be selected.",
            ));
        }
        Ok(())
    }

    fn css_classes(&self, glossary: &Glossary) -> Vec<String> {
        if glossary.get_bool(FLUID_KEY) {
            vec!["container-fluid".to_string()]
        } else {
            vec!["container".to_string()]
        }
    }

    fn identifier(&self, ctx: &dyn LayoutContext) -> String {
        let glossary = ctx.glossary();
        let prefix = if glossary.get_bool(FLUID_KEY) {
            "(fluid) "
        } else {
            ""
        };
        let selected = glossary.breakpoints();
        if selected.is_empty() {
            return prefix.trim_end().to_string();
        }
        let devices = selected
            .iter()
            .map(|bp| bp.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{prefix}for {devices}")
    }
}
