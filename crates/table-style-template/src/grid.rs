//! Fixed-shape glyph grid extracted from a box-drawing template.

/// Grid of glyph clusters read from a multi-line template.
///
/// Each line of the template fills one row, one character per cell. The
/// last cell of a row is an overflow bucket: once the column reaches
/// `COLS - 1` it stops advancing, so every remaining character on the line
/// lands there. Lines past `ROWS` are ignored. Cells never written to stay
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TemplateGrid<const ROWS: usize, const COLS: usize> {
    /// Cell storage (row-major)
    cells: [[String; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> TemplateGrid<ROWS, COLS> {
    /// Create a grid with every cell empty.
    pub(crate) fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
        }
    }

    /// Build a grid from a template.
    ///
    /// Surrounding whitespace is trimmed from the whole template and from
    /// each line before the characters are distributed into cells.
    pub(crate) fn parse(template: &str) -> Self {
        let mut grid = Self::new();
        let Some(last_col) = COLS.checked_sub(1) else {
            return grid;
        };

        for (row, line) in template.trim().split('\n').enumerate() {
            let Some(cells) = grid.cells.get_mut(row) else {
                tracing::trace!("Ignoring template lines from {} onward", row);
                break;
            };

            let mut col = 0;
            for ch in line.trim().chars() {
                cells[col].push(ch);
                if col < last_col {
                    col += 1;
                }
            }

            if cells[last_col].chars().count() > 1 {
                tracing::trace!(
                    "Row {} folded {:?} into its last cell",
                    row,
                    cells[last_col]
                );
            }
        }

        grid
    }

    /// Glyph cluster at a cell.
    ///
    /// Returns an empty string if the position is out of bounds.
    pub(crate) fn cell(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .map_or("", String::as_str)
    }
}

impl<const ROWS: usize, const COLS: usize> Default for TemplateGrid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}
