// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The row plugin: column-count selection and child column synthesis.

use serde_json::json;
use tracing::debug;
use trellis_core::{
    ChildPlan, Choice, FormField, Glossary, LayoutContext, LayoutPlugin, TrellisError, Widget,
};

use crate::column::{width_class, width_key, COLUMN};
use crate::container::CONTAINER;

/// Registry name of the row plugin.
pub const ROW: &str = "row";

/// Glossary key holding the requested column count.
pub const NUM_COLUMNS_KEY: &str = "num_columns";

/// Column counts a row may be split into; each divides the 12-unit grid.
pub const ROW_NUM_COLUMNS: [usize; 6] = [1, 2, 3, 4, 6, 12];

/// A horizontal band of columns. Saving a row synthesizes its column
/// children to match the requested count.
pub struct RowPlugin;

fn pluralize_columns(count: usize) -> String {
    if count == 1 {
        "1 column".to_string()
    } else {
        format!("{count} columns")
    }
}

impl LayoutPlugin for RowPlugin {
    fn name(&self) -> &'static str {
        ROW
    }

    fn parent_classes(&self) -> Option<&[&str]> {
        // Rows may nest inside columns for sub-grids.
        Some(&[CONTAINER, COLUMN])
    }

    fn default_css_class(&self) -> Option<&'static str> {
        Some("row")
    }

    fn form(&self, _ctx: &dyn LayoutContext) -> Result<Vec<FormField>, TrellisError> {
        let choices = ROW_NUM_COLUMNS
            .iter()
            .map(|count| Choice::new(count.to_string(), pluralize_columns(*count)))
            .collect();
        Ok(vec![FormField {
            name: NUM_COLUMNS_KEY.to_string(),
            label: "Columns".to_string(),
            help_text: "Number of columns to be created with this row.".to_string(),
            initial: Some(json!("3")),
            widget: Widget::Select { choices },
        }])
    }

    fn clean(&self, values: &Glossary) -> Result<(), TrellisError> {
        let count = values
            .get_str(NUM_COLUMNS_KEY)
            .and_then(|value| value.parse::<usize>().ok());
        match count {
            Some(count) if ROW_NUM_COLUMNS.contains(&count) => Ok(()),
            _ => Err(TrellisError::validation(format!(
                "Number of columns must be one of {ROW_NUM_COLUMNS:?}."
            ))),
        }
    }

    fn save(&self, ctx: &dyn LayoutContext) -> Result<Option<ChildPlan>, TrellisError> {
        let count = ctx
            .glossary()
            .get_str(NUM_COLUMNS_KEY)
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);
        if count == 0 {
            return Ok(None);
        }

        // The narrowest selected breakpoint comes from the enclosing
        // container via the merged glossary.
        let complete = ctx.complete_glossary();
        let narrowest = complete.breakpoints().into_iter().next().ok_or_else(|| {
            TrellisError::ImproperlyConfigured(
                "a row requires a container ancestor with at least one breakpoint".to_string(),
            )
        })?;

        // 12/N by floor division; any remainder is left for the editor.
        let width = 12 / count;
        let mut seed = Glossary::new();
        seed.set(width_key(narrowest), width_class(narrowest, width));
        debug!(count, %narrowest, width, "seeding row columns");

        Ok(Some(ChildPlan {
            plugin: COLUMN.to_string(),
            count,
            seed,
        }))
    }

    fn identifier(&self, ctx: &dyn LayoutContext) -> String {
        format!("with {}", pluralize_columns(ctx.child_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::Breakpoint;
    use trellis_plugin::LayoutTree;

    #[test]
    fn form_offers_fixed_column_counts() {
        let mut tree = LayoutTree::new();
        let id = tree.insert_root(ROW, Glossary::new());
        let fields = RowPlugin.form(&tree.context(id).unwrap()).unwrap();
        assert_eq!(fields.len(), 1);
        let choices = fields[0].widget.choices();
        let values: Vec<&str> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4", "6", "12"]);
        assert_eq!(choices[0].label, "1 column");
        assert_eq!(choices[2].label, "3 columns");
        // The initial is stored in the same representation as the choice
        // values, so a saved form reads back through `get_str`.
        let initial = fields[0].initial.as_ref().and_then(|v| v.as_str());
        assert_eq!(initial, Some("3"));
        assert!(choices.iter().any(|c| Some(c.value.as_str()) == initial));
    }

    #[test]
    fn clean_rejects_counts_outside_the_set() {
        let mut values = Glossary::new();
        values.set(NUM_COLUMNS_KEY, "5");
        assert!(RowPlugin.clean(&values).is_err());
        values.set(NUM_COLUMNS_KEY, "6");
        assert!(RowPlugin.clean(&values).is_ok());
        values.set(NUM_COLUMNS_KEY, "many");
        assert!(RowPlugin.clean(&values).is_err());
    }

    #[test]
    fn save_seeds_narrowest_selected_breakpoint() {
        let mut tree = LayoutTree::new();
        let mut container_glossary = Glossary::new();
        container_glossary.set_breakpoints(&[Breakpoint::Sm, Breakpoint::Lg]);
        let container = tree.insert_root(CONTAINER, container_glossary);

        let mut row_glossary = Glossary::new();
        row_glossary.set(NUM_COLUMNS_KEY, "4");
        let row = tree.insert_child(container, ROW, row_glossary).unwrap();

        let plan = RowPlugin
            .save(&tree.context(row).unwrap())
            .unwrap()
            .expect("row save should request children");
        assert_eq!(plan.plugin, COLUMN);
        assert_eq!(plan.count, 4);
        assert_eq!(plan.seed.get_str("sm-column-width"), Some("col-sm-3"));
    }

    #[test]
    fn save_without_container_is_improperly_configured() {
        let mut tree = LayoutTree::new();
        let mut row_glossary = Glossary::new();
        row_glossary.set(NUM_COLUMNS_KEY, "2");
        let row = tree.insert_root(ROW, row_glossary);

        assert!(matches!(
            RowPlugin.save(&tree.context(row).unwrap()),
            Err(TrellisError::ImproperlyConfigured(_))
        ));
    }

    #[test]
    fn identifier_reports_current_child_count() {
        let mut tree = LayoutTree::new();
        let row = tree.insert_root(ROW, Glossary::new());
        tree.insert_child(row, COLUMN, Glossary::new()).unwrap();
        assert_eq!(
            RowPlugin.identifier(&tree.context(row).unwrap()),
            "with 1 column"
        );
        tree.insert_child(row, COLUMN, Glossary::new()).unwrap();
        assert_eq!(
            RowPlugin.identifier(&tree.context(row).unwrap()),
            "with 2 columns"
        );
    }
}
