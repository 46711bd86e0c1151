//! Connector style extraction from a single separator line.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::TemplateGrid;

/// A connector template is one line laid out like the middle separator row
/// of a box template, so it shares that row's column positions.
const CONNECTOR_ROWS: usize = 1;
const CONNECTOR_COLS: usize = 10;

/// Separator glyphs used to connect merged rows.
///
/// Built from a single line such as `┣━━━╋━━━┫ ~`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BoxConnectorStyle {
    /// Separator at the left edge
    pub left_separator: String,
    /// Horizontal line glyph
    pub middle_horizontal: String,
    /// Separator where the line crosses a column border
    pub middle_separator: String,
    /// Separator at the right edge
    pub right_separator: String,
    /// Marker appended to a row that was cut off
    pub unfinished_row: String,
}

impl BoxConnectorStyle {
    /// Extract a connector style from a one-line template.
    ///
    /// Positions missing from the template come back as empty strings.
    pub fn from_template(template: &str) -> Self {
        let grid = TemplateGrid::<CONNECTOR_ROWS, CONNECTOR_COLS>::parse(template);
        let cell = |col| grid.cell(0, col).to_string();

        Self {
            left_separator: cell(0),
            middle_horizontal: cell(2),
            middle_separator: cell(4),
            right_separator: cell(8),
            unfinished_row: cell(9),
        }
    }

    /// Render the style back into its one-line template layout.
    pub fn to_template(&self) -> String {
        let horizontal = self.middle_horizontal.repeat(3);
        format!(
            "{}{horizontal}{}{horizontal}{}{}",
            self.left_separator, self.middle_separator, self.right_separator, self.unfinished_row
        )
    }
}

impl fmt::Display for BoxConnectorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_template())
    }
}

/// Extract a connector style from a one-line template.
///
/// See [`BoxConnectorStyle::from_template`].
pub fn parse_box_connector_style(template: &str) -> BoxConnectorStyle {
    BoxConnectorStyle::from_template(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_connector() {
        let input = "\n┣━━━╋━━━┫ ~\n";
        let expected = BoxConnectorStyle {
            left_separator: "┣".to_string(),
            middle_horizontal: "━".to_string(),
            middle_separator: "╋".to_string(),
            right_separator: "┫".to_string(),
            unfinished_row: " ~".to_string(),
        };

        assert_eq!(BoxConnectorStyle::from_template(input), expected);
        assert_eq!(BoxConnectorStyle::from_template(input.trim()), expected);
    }

    #[test]
    fn test_double_connector() {
        let input = "╠═══╬═══╣ ≈\n";
        let expected = BoxConnectorStyle {
            left_separator: "╠".to_string(),
            middle_horizontal: "═".to_string(),
            middle_separator: "╬".to_string(),
            right_separator: "╣".to_string(),
            unfinished_row: " ≈".to_string(),
        };

        assert_eq!(BoxConnectorStyle::from_template(input), expected);
        assert_eq!(BoxConnectorStyle::from_template(input.trim()), expected);
    }

    #[test]
    fn test_without_unfinished_marker() {
        let style = BoxConnectorStyle::from_template("├───┼───┤");
        assert_eq!(style.right_separator, "┤");
        assert_eq!(style.unfinished_row, "");
    }

    #[test]
    fn test_only_first_line_used() {
        let style = BoxConnectorStyle::from_template("├───┼───┤\n┣━━━╋━━━┫ ~");
        assert_eq!(style.left_separator, "├");
        assert_eq!(style.unfinished_row, "");
    }

    #[test]
    fn test_short_template() {
        let style = BoxConnectorStyle::from_template("├─");
        assert_eq!(style.left_separator, "├");
        assert_eq!(style.middle_horizontal, "");
        assert_eq!(style.middle_separator, "");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(
            BoxConnectorStyle::from_template("   \n  "),
            BoxConnectorStyle::default()
        );
    }

    #[test]
    fn test_render_round_trip() {
        let input = "┣━━━╋━━━┫ ~";
        let style = parse_box_connector_style(input);
        assert_eq!(style.to_template(), input);
        assert_eq!(style.to_string(), input);
    }
}
