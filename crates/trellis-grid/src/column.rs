// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The column plugin: per-breakpoint width, offset, ordering, and
//! visibility fields, synthesized from the enclosing container's
//! breakpoint selection.

use serde_json::json;
use trellis_config::{BoundTable, GridConfig};
use trellis_core::{
    Breakpoint, Choice, FormField, Glossary, LayoutContext, LayoutPlugin, TrellisError, Widget,
    FLUID_KEY,
};

use crate::container::CONTAINER;
use crate::range::resolve;
use crate::row::ROW;

/// Registry name of the column plugin.
pub const COLUMN: &str = "column";

/// Glossary key of a breakpoint's column width.
pub fn width_key(bp: Breakpoint) -> String {
    format!("{bp}-column-width")
}

/// Glossary key of a breakpoint's column offset.
pub fn offset_key(bp: Breakpoint) -> String {
    format!("{bp}-column-offset")
}

/// Glossary key of a breakpoint's reorder priority.
pub fn ordering_key(bp: Breakpoint) -> String {
    format!("{bp}-column-ordering")
}

/// Glossary key of a breakpoint's visibility utility.
pub fn visibility_key(bp: Breakpoint) -> String {
    format!("{bp}-responsive-utils")
}

/// CSS class of a flex (unsized) column. The narrowest breakpoint has no
/// infix, per Bootstrap's mobile-first class scheme.
pub fn flex_class(bp: Breakpoint) -> String {
    if bp == Breakpoint::Xs {
        "col".to_string()
    } else {
        format!("col-{bp}")
    }
}

/// CSS class of a fixed-width column.
pub fn width_class(bp: Breakpoint, units: usize) -> String {
    if bp == Breakpoint::Xs {
        format!("col-{units}")
    } else {
        format!("col-{bp}-{units}")
    }
}

fn auto_class(bp: Breakpoint) -> String {
    if bp == Breakpoint::Xs {
        "col-auto".to_string()
    } else {
        format!("col-{bp}-auto")
    }
}

fn offset_class(bp: Breakpoint, units: usize) -> String {
    if bp == Breakpoint::Xs {
        format!("offset-{units}")
    } else {
        format!("offset-{bp}-{units}")
    }
}

fn order_class(bp: Breakpoint, units: usize) -> String {
    if bp == Breakpoint::Xs {
        format!("order-{units}")
    } else {
        format!("order-{bp}-{units}")
    }
}

fn unit_label(units: usize) -> String {
    if units == 1 {
        "1 unit".to_string()
    } else {
        format!("{units} units")
    }
}

/// A grid cell. All four field families are synthesized per selected
/// breakpoint and interleaved by category for display.
pub struct ColumnPlugin {
    fluid_bounds: BoundTable,
    default_bounds: BoundTable,
}

impl ColumnPlugin {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            fluid_bounds: config.fluid_bounds.clone(),
            default_bounds: config.default_bounds.clone(),
        }
    }

    /// The container glossary governing this column, or a configuration
    /// error when the ancestry is broken.
    fn container_glossary(ctx: &dyn LayoutContext) -> Result<Glossary, TrellisError> {
        ctx.ancestors()
            .into_iter()
            .find(|(plugin, _)| plugin == CONTAINER)
            .map(|(_, glossary)| glossary)
            .ok_or_else(|| {
                TrellisError::ImproperlyConfigured(
                    "a column requires a container ancestor".to_string(),
                )
            })
    }
}

/// The inherit choice offered on every breakpoint after the first.
fn inherit_choice() -> Choice {
    Choice::new("", "Inherit from above")
}

impl LayoutPlugin for ColumnPlugin {
    fn name(&self) -> &'static str {
        COLUMN
    }

    fn parent_classes(&self) -> Option<&[&str]> {
        Some(&[ROW])
    }

    fn form(&self, ctx: &dyn LayoutContext) -> Result<Vec<FormField>, TrellisError> {
        let container = Self::container_glossary(ctx)?;
        let selected = container.breakpoints();
        if selected.is_empty() {
            return Err(TrellisError::ImproperlyConfigured(
                "the enclosing container has no breakpoints selected".to_string(),
            ));
        }
        let bounds = if container.get_bool(FLUID_KEY) {
            &self.fluid_bounds
        } else {
            &self.default_bounds
        };

        let mut widths = Vec::with_capacity(selected.len());
        let mut offsets = Vec::with_capacity(selected.len());
        let mut orderings = Vec::with_capacity(selected.len());
        let mut visibilities = Vec::with_capacity(selected.len());

        for (index, bp) in selected.iter().copied().enumerate() {
            let range = resolve(&selected, index, bounds);
            let devices = range.device_labels();
            let first = index == 0;

            // Width: flex, fixed 1..=12, auto. The first selected breakpoint
            // must choose; later ones may inherit.
            let mut choices = vec![Choice::new(flex_class(bp), "Flex column")];
            choices.extend((1..=12).map(|units| {
                Choice::new(
                    width_class(bp, units),
                    format!("{} fixed column", unit_label(units)),
                )
            }));
            choices.push(Choice::new(auto_class(bp), "Auto column"));
            let (initial, help_subject) = if first {
                (json!(width_class(bp, 12)), "Column width")
            } else {
                choices.insert(0, inherit_choice());
                (json!(""), "Override column width")
            };
            widths.push(FormField {
                name: width_key(bp),
                label: format!("Column width for {devices}"),
                help_text: range.help_text(help_subject),
                initial: Some(initial),
                widget: Widget::Select { choices },
            });

            // Offset: the first breakpoint starts from "no offset", later
            // ones from "inherit" with an explicit zero available.
            let (mut choices, offset_units) = if first {
                (vec![Choice::new("", "No offset")], 1..=12)
            } else {
                (vec![inherit_choice()], 0..=12)
            };
            choices.extend(
                offset_units.map(|units| Choice::new(offset_class(bp, units), unit_label(units))),
            );
            offsets.push(FormField {
                name: offset_key(bp),
                label: format!("Offset for {devices}"),
                help_text: range.help_text("Offset width"),
                initial: None,
                widget: Widget::Select { choices },
            });

            // Ordering: optional reorder priority.
            let mut choices = vec![Choice::new("", "No reordering")];
            choices.extend((1..=12).map(|units| {
                Choice::new(
                    order_class(bp, units),
                    format!("Reorder by {}", unit_label(units)),
                )
            }));
            orderings.push(FormField {
                name: ordering_key(bp),
                label: format!("Reordering for {devices}"),
                help_text: range.help_text("Reordering"),
                initial: None,
                widget: Widget::Select { choices },
            });

            // Visibility: tri-state scoped to the breakpoint.
            visibilities.push(FormField {
                name: visibility_key(bp),
                label: format!("Responsive utilities for {devices}"),
                help_text: range.help_text("Utility classes for showing and hiding content"),
                initial: Some(json!("")),
                widget: Widget::RadioSelect {
                    choices: vec![
                        Choice::new("", "Default"),
                        Choice::new(format!("visible-{bp}"), "Visible"),
                        Choice::new(format!("hidden-{bp}"), "Hidden"),
                    ],
                },
            });
        }

        // Interleave by category rather than by breakpoint, purely for
        // form display ordering.
        let mut fields = widths;
        fields.extend(offsets);
        fields.extend(orderings);
        fields.extend(visibilities);
        Ok(fields)
    }

    fn css_classes(&self, glossary: &Glossary) -> Vec<String> {
        let mut classes = Vec::new();
        for bp in Breakpoint::all() {
            for key in [
                width_key(bp),
                offset_key(bp),
                ordering_key(bp),
                visibility_key(bp),
            ] {
                if let Some(class) = glossary.get_str(&key)
                    && !class.is_empty()
                {
                    classes.push(class.to_string());
                }
            }
        }
        classes
    }

    fn identifier(&self, ctx: &dyn LayoutContext) -> String {
        let selected = ctx.complete_glossary().breakpoints();
        let glossary = ctx.glossary();
        let widths: Vec<String> = selected
            .into_iter()
            .filter_map(|bp| {
                glossary
                    .get_str(&width_key(bp))
                    .and_then(|class| width_token(bp, class))
            })
            .collect();

        match widths.as_slice() {
            [] => "unknown width".to_string(),
            [only] => {
                if only.as_str() == "1" {
                    "default width: 1 unit".to_string()
                } else {
                    format!("default width: {only} units")
                }
            }
            several => format!("widths: {} units", several.join(" / ")),
        }
    }
}

/// Extract the displayable width token from a stored width class.
///
/// `col-md-4` at md yields `4`, `col-auto` at xs yields `auto`. Flex
/// classes carry no token, and inherit (empty) entries yield `None`.
fn width_token(bp: Breakpoint, class: &str) -> Option<String> {
    if class.is_empty() || class == flex_class(bp) {
        return None;
    }
    let rest = if bp == Breakpoint::Xs {
        class.strip_prefix("col-")?
    } else {
        class.strip_prefix(&format!("col-{bp}-"))?
    };
    (!rest.is_empty()).then(|| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_plugin::{LayoutTree, NodeId};

    fn plugin() -> ColumnPlugin {
        ColumnPlugin::new(&GridConfig::default())
    }

    fn column_under_container(breakpoints: &[Breakpoint]) -> (LayoutTree, NodeId) {
        let mut tree = LayoutTree::new();
        let mut container_glossary = Glossary::new();
        container_glossary.set_breakpoints(breakpoints);
        let container = tree.insert_root(CONTAINER, container_glossary);
        let row = tree.insert_child(container, ROW, Glossary::new()).unwrap();
        let column = tree.insert_child(row, COLUMN, Glossary::new()).unwrap();
        (tree, column)
    }

    #[test]
    fn form_synthesizes_four_fields_per_breakpoint() {
        let (tree, column) = column_under_container(&[Breakpoint::Xs, Breakpoint::Md]);
        let fields = plugin().form(&tree.context(column).unwrap()).unwrap();
        assert_eq!(fields.len(), 8);

        // Interleaved by category: widths first, then offsets, orderings,
        // visibilities, each in breakpoint order.
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "xs-column-width",
                "md-column-width",
                "xs-column-offset",
                "md-column-offset",
                "xs-column-ordering",
                "md-column-ordering",
                "xs-responsive-utils",
                "md-responsive-utils",
            ]
        );
    }

    #[test]
    fn first_breakpoint_has_no_inherit_and_a_full_width_initial() {
        let (tree, column) = column_under_container(&[Breakpoint::Xs, Breakpoint::Md]);
        let fields = plugin().form(&tree.context(column).unwrap()).unwrap();

        let xs_width = &fields[0];
        assert!(!xs_width.widget.has_inherit_choice());
        assert_eq!(xs_width.initial, Some(json!("col-12")));

        let md_width = &fields[1];
        assert!(md_width.widget.has_inherit_choice());
        assert_eq!(md_width.initial, Some(json!("")));
        assert_eq!(md_width.widget.choices()[0].value, "");
    }

    #[test]
    fn offsets_inherit_after_the_first_breakpoint() {
        let (tree, column) =
            column_under_container(&[Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg]);
        let fields = plugin().form(&tree.context(column).unwrap()).unwrap();

        let sm_offset = fields.iter().find(|f| f.name == "sm-column-offset").unwrap();
        assert_eq!(sm_offset.widget.choices()[0].label, "No offset");
        // First breakpoint offers 1..=12 plus the empty choice.
        assert_eq!(sm_offset.widget.choices().len(), 13);

        let md_offset = fields.iter().find(|f| f.name == "md-column-offset").unwrap();
        assert!(md_offset.widget.has_inherit_choice());
        // Later breakpoints add the explicit zero offset.
        assert_eq!(md_offset.widget.choices().len(), 14);
        assert_eq!(md_offset.widget.choices()[1].value, "offset-md-0");
    }

    #[test]
    fn width_choices_use_breakpoint_infixes() {
        let (tree, column) = column_under_container(&[Breakpoint::Xs, Breakpoint::Md]);
        let fields = plugin().form(&tree.context(column).unwrap()).unwrap();

        let xs_choices = fields[0].widget.choices();
        assert_eq!(xs_choices[0].value, "col");
        assert_eq!(xs_choices[1].value, "col-1");
        assert_eq!(xs_choices.last().unwrap().value, "col-auto");

        let md_choices = fields[1].widget.choices();
        assert_eq!(md_choices[1].value, "col-md");
        assert_eq!(md_choices[2].value, "col-md-1");
        assert_eq!(md_choices.last().unwrap().value, "col-md-auto");
    }

    #[test]
    fn visibility_is_tri_state_per_breakpoint() {
        let (tree, column) = column_under_container(&[Breakpoint::Lg]);
        let fields = plugin().form(&tree.context(column).unwrap()).unwrap();
        let visibility = fields
            .iter()
            .find(|f| f.name == "lg-responsive-utils")
            .unwrap();
        let values: Vec<&str> = visibility
            .widget
            .choices()
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(values, vec!["", "visible-lg", "hidden-lg"]);
        assert!(matches!(visibility.widget, Widget::RadioSelect { .. }));
    }

    #[test]
    fn orphan_column_is_improperly_configured() {
        let mut tree = LayoutTree::new();
        let column = tree.insert_root(COLUMN, Glossary::new());
        assert!(matches!(
            plugin().form(&tree.context(column).unwrap()),
            Err(TrellisError::ImproperlyConfigured(_))
        ));
    }

    #[test]
    fn column_under_row_without_container_is_improperly_configured() {
        let mut tree = LayoutTree::new();
        let row = tree.insert_root(ROW, Glossary::new());
        let column = tree.insert_child(row, COLUMN, Glossary::new()).unwrap();
        assert!(matches!(
            plugin().form(&tree.context(column).unwrap()),
            Err(TrellisError::ImproperlyConfigured(_))
        ));
    }

    #[test]
    fn identifier_skips_inherited_widths() {
        let (mut tree, column) =
            column_under_container(&[Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Md]);
        let glossary = &mut tree.node_mut(column).unwrap().glossary;
        glossary.set("xs-column-width", "col-6");
        glossary.set("sm-column-width", "");
        glossary.set("md-column-width", "col-md-4");

        let identifier = plugin().identifier(&tree.context(column).unwrap());
        assert_eq!(identifier, "widths: 6 / 4 units");
    }

    #[test]
    fn identifier_single_and_unknown_widths() {
        let (mut tree, column) = column_under_container(&[Breakpoint::Xs, Breakpoint::Md]);
        assert_eq!(
            plugin().identifier(&tree.context(column).unwrap()),
            "unknown width"
        );

        tree.node_mut(column)
            .unwrap()
            .glossary
            .set("md-column-width", "col-md-1");
        assert_eq!(
            plugin().identifier(&tree.context(column).unwrap()),
            "default width: 1 unit"
        );
    }

    #[test]
    fn width_token_extraction() {
        assert_eq!(
            width_token(Breakpoint::Xs, "col-6"),
            Some("6".to_string())
        );
        assert_eq!(
            width_token(Breakpoint::Md, "col-md-4"),
            Some("4".to_string())
        );
        assert_eq!(
            width_token(Breakpoint::Sm, "col-sm-auto"),
            Some("auto".to_string())
        );
        // Flex classes carry no width token.
        assert_eq!(width_token(Breakpoint::Xs, "col"), None);
        assert_eq!(width_token(Breakpoint::Sm, "col-sm"), None);
        assert_eq!(width_token(Breakpoint::Md, ""), None);
    }

    #[test]
    fn css_classes_collect_all_configured_families() {
        let mut glossary = Glossary::new();
        glossary.set("xs-column-width", "col-6");
        glossary.set("md-column-width", "col-md-4");
        glossary.set("md-column-offset", "offset-md-2");
        glossary.set("lg-responsive-utils", "hidden-lg");
        glossary.set("sm-column-ordering", "");

        let classes = plugin().css_classes(&glossary);
        assert_eq!(classes, vec!["col-6", "col-md-4", "offset-md-2", "hidden-lg"]);
    }
}
