//! Geometric placement of triangle cells.
//!
//! Mirrors the on-screen arrangement: columns step right by a fixed spacing,
//! rows stack downward, and every row is centered on the triangle's vertical
//! axis. Centering makes each interior cell sit horizontally midway below
//! its two parents, which is the parent-to-child relationship the animation
//! draws along.

/// A point in scene units. `y` grows upward, rows descend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Spacing parameters for cell placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Horizontal distance between neighboring cells of a row.
    pub col_spacing: f64,
    /// Vertical distance between consecutive rows.
    pub row_spacing: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            col_spacing: 2.0,
            row_spacing: 1.5,
        }
    }
}

impl Layout {
    /// Resting position of cell `(row, col)` relative to the triangle apex.
    pub fn cell_position(&self, row: usize, col: usize) -> Position {
        let x = (col as f64 - row as f64 / 2.0) * self.col_spacing;
        let y = -(row as f64) * self.row_spacing;
        Position { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::Layout;

    #[test]
    fn apex_sits_at_origin() {
        let layout = Layout::default();
        let p = layout.cell_position(0, 0);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn rows_are_centered() {
        let layout = Layout::default();
        for row in 0..8 {
            let first = layout.cell_position(row, 0);
            let last = layout.cell_position(row, row);
            assert_eq!(first.x, -last.x);
            assert_eq!(first.y, last.y);
        }
    }

    #[test]
    fn child_is_midway_below_its_parents() {
        let layout = Layout::default();
        for row in 1..8 {
            for col in 1..row {
                let child = layout.cell_position(row, col);
                let left = layout.cell_position(row - 1, col - 1);
                let right = layout.cell_position(row - 1, col);
                assert_eq!(child.x, (left.x + right.x) / 2.0);
                assert_eq!(child.y, left.y - layout.row_spacing);
            }
        }
    }
}
