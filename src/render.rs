//! Draws a [`Tree`] as a triangle of text, one line per level, each line
//! centered under the widest (deepest) one.

use std::fmt;

use crate::level::Slot;
use crate::tree::Tree;

/// Cell sizing shared by every row of a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Characters reserved for a value. Slots are left aligned within it.
    value_width: usize,
    /// Spaces on each side of a value.
    pad: usize,
}

impl Layout {
    /// Sizes cells from the tree's largest value.
    fn for_max(max: i64) -> Self {
        let value_width = max.to_string().len();
        Self {
            value_width,
            pad: value_width.div_ceil(2),
        }
    }

    fn cell_width(self) -> usize {
        self.value_width + 2 * self.pad
    }

    fn row_width(self, cells: usize) -> usize {
        cells * self.cell_width()
    }

    fn write_row(self, f: &mut fmt::Formatter<'_>, row: &[Slot], indent: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = indent)?;
        for slot in row {
            write!(
                f,
                "{:pad$}{:<width$}{:pad$}",
                "",
                slot,
                "",
                pad = self.pad,
                width = self.value_width
            )?;
        }
        Ok(())
    }
}

/// Every row is written as `"\n" + indent + cells + "\n"`, where vacant
/// positions show as `-`.
///
/// # Examples
///
/// ```
/// use int_bst::Tree;
///
/// let tree = Tree::from_values([10, 5, 15]).unwrap();
/// assert_eq!(tree.to_string(), "\n   10 \n\n 5   15 \n");
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.level_grid();
        let layout = Layout::for_max(self.max());
        let widest = grid.last().map_or(0, |row| layout.row_width(row.len()));

        for row in &grid {
            let indent = (widest - layout.row_width(row.len())) / 2;
            writeln!(f)?;
            layout.write_row(f, row, indent)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
