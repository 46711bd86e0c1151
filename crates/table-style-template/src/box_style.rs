//! Box style extraction from a drawn 2x2 box.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use table_style_core::display_width;

use crate::grid::TemplateGrid;

/// Rows in a box template.
const BOX_ROWS: usize = 4;
/// Cells per box template row; the last one holds the unfinished-row marker.
const BOX_COLS: usize = 10;

/// Row used between pages of a table.
const PAGE_SEPARATOR: &str = "\n";

/// Glyphs needed to draw a table box.
///
/// Built from a template that draws a 2x2 box with padding markers:
///
/// ```text
/// ┏━━━┳━━━┓
/// ┣━━━╋━━━┫
/// ┃< >┃< >┃ ~
/// ┗━━━┻━━━┛
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BoxStyle {
    /// Bottom-left corner
    pub bottom_left: String,
    /// Bottom-right corner
    pub bottom_right: String,
    /// Separator where a column border meets the bottom edge
    pub bottom_separator: String,
    /// Blank fill as wide as `middle_separator`
    pub empty_separator: String,
    /// Left edge of a row
    pub left: String,
    /// Separator where a row border meets the left edge
    pub left_separator: String,
    /// Horizontal line glyph
    pub middle_horizontal: String,
    /// Separator where row and column borders cross
    pub middle_separator: String,
    /// Vertical line between columns
    pub middle_vertical: String,
    /// Padding placed before cell content
    pub padding_left: String,
    /// Padding placed after cell content
    pub padding_right: String,
    /// Separator between pages, always a line break
    pub page_separator: String,
    /// Right edge of a row
    pub right: String,
    /// Separator where a row border meets the right edge
    pub right_separator: String,
    /// Top-left corner
    pub top_left: String,
    /// Top-right corner
    pub top_right: String,
    /// Separator where a column border meets the top edge
    pub top_separator: String,
    /// Marker appended to a row that was cut off
    pub unfinished_row: String,
}

impl BoxStyle {
    /// Extract a box style from a drawn template.
    ///
    /// The template is read as a fixed grid: corners and edges at columns 0
    /// and 8, separators at column 4, the horizontal glyph at column 2 of the
    /// top row, padding at columns 1 and 3 of the content row, and anything
    /// after the content row's right edge as the unfinished-row marker.
    /// Positions missing from the template come back as empty strings.
    pub fn from_template(template: &str) -> Self {
        let grid = TemplateGrid::<BOX_ROWS, BOX_COLS>::parse(template);
        let cell = |row, col| grid.cell(row, col).to_string();

        let middle_separator = cell(1, 4);
        let empty_separator = " ".repeat(display_width(&middle_separator));

        let style = Self {
            bottom_left: cell(3, 0),
            bottom_right: cell(3, 8),
            bottom_separator: cell(3, 4),
            empty_separator,
            left: cell(2, 0),
            left_separator: cell(1, 0),
            middle_horizontal: cell(0, 2),
            middle_separator,
            middle_vertical: cell(2, 4),
            padding_left: cell(2, 1),
            padding_right: cell(2, 3),
            page_separator: PAGE_SEPARATOR.to_string(),
            right: cell(2, 8),
            right_separator: cell(1, 8),
            top_left: cell(0, 0),
            top_right: cell(0, 8),
            top_separator: cell(0, 4),
            unfinished_row: cell(2, 9),
        };

        tracing::debug!(
            "Parsed box style {}{}{}",
            style.top_left,
            style.middle_horizontal,
            style.top_right
        );

        style
    }

    /// Render the style back into its 4-line template layout.
    ///
    /// Lines are joined with `\n` and carry no surrounding whitespace beyond
    /// the unfinished-row marker.
    pub fn to_template(&self) -> String {
        let horizontal = self.middle_horizontal.repeat(3);
        let cell = format!("{} {}", self.padding_left, self.padding_right);

        [
            format!(
                "{}{horizontal}{}{horizontal}{}",
                self.top_left, self.top_separator, self.top_right
            ),
            format!(
                "{}{horizontal}{}{horizontal}{}",
                self.left_separator, self.middle_separator, self.right_separator
            ),
            format!(
                "{}{cell}{}{cell}{}{}",
                self.left, self.middle_vertical, self.right, self.unfinished_row
            ),
            format!(
                "{}{horizontal}{}{horizontal}{}",
                self.bottom_left, self.bottom_separator, self.bottom_right
            ),
        ]
        .join("\n")
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_template())
    }
}

/// Extract a box style from a drawn template.
///
/// See [`BoxStyle::from_template`].
pub fn parse_box_style(template: &str) -> BoxStyle {
    BoxStyle::from_template(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heavy_style() -> BoxStyle {
        BoxStyle {
            bottom_left: "┗".to_string(),
            bottom_right: "┛".to_string(),
            bottom_separator: "┻".to_string(),
            empty_separator: " ".to_string(),
            left: "┃".to_string(),
            left_separator: "┣".to_string(),
            middle_horizontal: "━".to_string(),
            middle_separator: "╋".to_string(),
            middle_vertical: "┃".to_string(),
            padding_left: "<".to_string(),
            padding_right: ">".to_string(),
            page_separator: "\n".to_string(),
            right: "┃".to_string(),
            right_separator: "┫".to_string(),
            top_left: "┏".to_string(),
            top_right: "┓".to_string(),
            top_separator: "┳".to_string(),
            unfinished_row: " ~".to_string(),
        }
    }

    #[test]
    fn test_heavy_box() {
        let input = "
┏━━━┳━━━┓
┣━━━╋━━━┫
┃< >┃< >┃ ~
┗━━━┻━━━┛
";
        assert_eq!(BoxStyle::from_template(input), heavy_style());
        assert_eq!(BoxStyle::from_template(input.trim()), heavy_style());
    }

    #[test]
    fn test_double_box() {
        let input = "╔═══╦═══╗\n".to_string() + "╠═══╬═══╣\n" + "║   ║   ║ ≈\n" + "╚═══╩═══╝\n";
        let expected = BoxStyle {
            bottom_left: "╚".to_string(),
            bottom_right: "╝".to_string(),
            bottom_separator: "╩".to_string(),
            empty_separator: " ".to_string(),
            left: "║".to_string(),
            left_separator: "╠".to_string(),
            middle_horizontal: "═".to_string(),
            middle_separator: "╬".to_string(),
            middle_vertical: "║".to_string(),
            padding_left: " ".to_string(),
            padding_right: " ".to_string(),
            page_separator: "\n".to_string(),
            right: "║".to_string(),
            right_separator: "╣".to_string(),
            top_left: "╔".to_string(),
            top_right: "╗".to_string(),
            top_separator: "╦".to_string(),
            unfinished_row: " ≈".to_string(),
        };

        assert_eq!(BoxStyle::from_template(&input), expected);
        assert_eq!(BoxStyle::from_template(input.trim()), expected);
    }

    #[test]
    fn test_indented_template() {
        let input = "
            +---+---+
            |---+---|
            |[ ]|[ ]| …
            +---+---+
        ";
        let style = BoxStyle::from_template(input);
        assert_eq!(style.top_left, "+");
        assert_eq!(style.left_separator, "|");
        assert_eq!(style.middle_horizontal, "-");
        assert_eq!(style.padding_left, "[");
        assert_eq!(style.padding_right, "]");
        assert_eq!(style.unfinished_row, " …");
    }

    #[test]
    fn test_without_unfinished_marker() {
        let style = BoxStyle::from_template("┌───┬───┐\n├───┼───┤\n│   │   │\n└───┴───┘");
        assert_eq!(style.right, "│");
        assert_eq!(style.unfinished_row, "");
    }

    #[test]
    fn test_long_unfinished_marker() {
        let style = BoxStyle::from_template("┌───┬───┐\n├───┼───┤\n│   │   │ ...more\n└───┴───┘");
        assert_eq!(style.unfinished_row, " ...more");
    }

    #[test]
    fn test_wide_separator_empty_fill() {
        let style = BoxStyle::from_template("+---+---+\n+---表---+\n|   |   |\n+---+---+");
        assert_eq!(style.middle_separator, "表");
        assert_eq!(style.empty_separator, "  ");
    }

    #[test]
    fn test_empty_template() {
        let style = BoxStyle::from_template("");
        assert_eq!(style.top_left, "");
        assert_eq!(style.unfinished_row, "");
        assert_eq!(style.empty_separator, "");
        assert_eq!(style.page_separator, "\n");
    }

    #[test]
    fn test_short_template() {
        let style = BoxStyle::from_template("┏━━━┳━━━┓");
        assert_eq!(style.top_right, "┓");
        assert_eq!(style.left_separator, "");
        assert_eq!(style.bottom_left, "");
    }

    #[test]
    fn test_extra_lines_ignored() {
        let input = "┏━━━┳━━━┓\n┣━━━╋━━━┫\n┃< >┃< >┃ ~\n┗━━━┻━━━┛\nextra\nlines";
        assert_eq!(BoxStyle::from_template(input), heavy_style());
    }

    #[test]
    fn test_to_template() {
        assert_eq!(
            heavy_style().to_template(),
            "┏━━━┳━━━┓\n┣━━━╋━━━┫\n┃< >┃< >┃ ~\n┗━━━┻━━━┛"
        );
    }

    #[test]
    fn test_display_matches_template() {
        let style = heavy_style();
        assert_eq!(style.to_string(), style.to_template());
    }

    #[test]
    fn test_render_round_trip() {
        let style = heavy_style();
        assert_eq!(BoxStyle::from_template(&style.to_template()), style);
    }

    #[test]
    fn test_parse_box_style_alias() {
        let template = heavy_style().to_template();
        assert_eq!(parse_box_style(&template), BoxStyle::from_template(&template));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(heavy_style()).unwrap();
        assert_eq!(json["top_left"], "┏");
        assert_eq!(json["unfinished_row"], " ~");
        assert_eq!(json["page_separator"], "\n");

        let back: BoxStyle = serde_json::from_value(json).unwrap();
        assert_eq!(back, heavy_style());
    }
}
