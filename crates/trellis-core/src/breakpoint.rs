// SPDX-FileCopyrightText: 2026 Trellis Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ordered responsive breakpoint enumeration.
//!
//! Breakpoints are fixed at compile time and ordered narrow to wide; the
//! pixel bounds attached to each breakpoint live in `trellis-config` and may
//! differ between fixed-width and fluid containers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A named responsive-design threshold, ordered narrow to wide.
///
/// The derived `Ord` follows declaration order, which is the canonical
/// narrow-to-wide order used everywhere in the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Human device label shown in form labels and identifiers.
    pub fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "Portrait phones",
            Breakpoint::Sm => "Landscape phones",
            Breakpoint::Md => "Tablets",
            Breakpoint::Lg => "Desktops",
            Breakpoint::Xl => "Large desktops",
        }
    }

    /// All breakpoints in canonical narrow-to-wide order.
    pub fn all() -> Vec<Breakpoint> {
        Breakpoint::iter().collect()
    }

    /// The slice of the canonical order from `first` (inclusive) up to
    /// `last` (exclusive). `None` runs through the widest breakpoint.
    pub fn range(first: Breakpoint, last: Option<Breakpoint>) -> Vec<Breakpoint> {
        Breakpoint::iter()
            .filter(|bp| *bp >= first && last.is_none_or(|l| *bp < l))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn order_is_narrow_to_wide() {
        let all = Breakpoint::all();
        assert_eq!(
            all,
            vec![
                Breakpoint::Xs,
                Breakpoint::Sm,
                Breakpoint::Md,
                Breakpoint::Lg,
                Breakpoint::Xl
            ]
        );
        assert!(Breakpoint::Xs < Breakpoint::Xl);
    }

    #[test]
    fn display_and_parse_round_trip() {
        for bp in Breakpoint::all() {
            let parsed = Breakpoint::from_str(&bp.to_string()).expect("should parse back");
            assert_eq!(bp, parsed);
        }
        assert_eq!(Breakpoint::Md.to_string(), "md");
        assert!(Breakpoint::from_str("xxl").is_err());
    }

    #[test]
    fn range_with_upper_neighbor_excludes_it() {
        let range = Breakpoint::range(Breakpoint::Xs, Some(Breakpoint::Md));
        assert_eq!(range, vec![Breakpoint::Xs, Breakpoint::Sm]);
    }

    #[test]
    fn range_open_ended_runs_to_widest() {
        let range = Breakpoint::range(Breakpoint::Lg, None);
        assert_eq!(range, vec![Breakpoint::Lg, Breakpoint::Xl]);
    }

    #[test]
    fn range_collapses_to_single_entry() {
        let range = Breakpoint::range(Breakpoint::Sm, Some(Breakpoint::Md));
        assert_eq!(range, vec![Breakpoint::Sm]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Breakpoint::Lg).expect("should serialize");
        assert_eq!(json, "\"lg\"");
        let parsed: Breakpoint = serde_json::from_str("\"sm\"").expect("should deserialize");
        assert_eq!(parsed, Breakpoint::Sm);
    }
}
