//! The triangle data model and its builder.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{Result, TriangleError};
use crate::focus::FocusState;
use crate::layout::{Layout, Position};

/// One entry of the triangle, holding the binomial coefficient `C(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub value: BigUint,
}

/// One horizontal level of the triangle, cells indexed `0..=index`.
///
/// `offset` is the row's displacement from its resting layout position. The
/// presentation layer moves rows around (a focused row slides to the top
/// edge, rows line up on the left for the row-sum scene); the focus snapshot
/// captures it so those moves can be undone.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub cells: Vec<Cell>,
    pub offset: Position,
}

impl Row {
    /// Row 0, the single-cell base case `[1]`.
    fn base() -> Self {
        Row {
            index: 0,
            cells: vec![Cell {
                row: 0,
                col: 0,
                value: BigUint::one(),
            }],
            offset: Position::default(),
        }
    }

    /// The next row down: ends are 1, each interior cell is the sum of the
    /// two cells above it.
    fn successor(&self) -> Self {
        let index = self.index + 1;
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.push(Cell {
            row: index,
            col: 0,
            value: BigUint::one(),
        });
        for (col, pair) in self.cells.windows(2).enumerate() {
            cells.push(Cell {
                row: index,
                col: col + 1,
                value: &pair[0].value + &pair[1].value,
            });
        }
        cells.push(Cell {
            row: index,
            col: index,
            value: BigUint::one(),
        });
        Row {
            index,
            cells,
            offset: Position::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of the row's values; equals `2^index`.
    pub fn sum(&self) -> BigUint {
        self.cells
            .iter()
            .fold(BigUint::zero(), |acc, c| acc + &c.value)
    }

    /// Neighboring-cell pairs, the parents each cell of the next row (ends
    /// aside) is derived from and animated out of.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&Cell, &Cell)> {
        self.cells.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// Incrementally grows Pascal's triangle and tracks row focus.
///
/// Rows are append-only and generated strictly in order; values use the
/// addition rule only, which matches the closed-form binomial coefficient
/// cell for cell. One builder exclusively owns its rows.
#[derive(Debug, Clone, Default)]
pub struct TriangleBuilder {
    rows: Vec<Row>,
    layout: Layout,
    origin: Position,
    focus: FocusState,
}

impl TriangleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: Layout) -> Self {
        TriangleBuilder {
            layout,
            ..Self::default()
        }
    }

    /// Drops any existing rows (and focus) and generates rows `0..=up_to`.
    pub fn generate(&mut self, up_to: usize) {
        debug!("regenerating triangle up to row {up_to}");
        self.rows.clear();
        self.focus = FocusState::Unfocused;
        for _ in 0..=up_to {
            self.generate_next_row();
        }
    }

    /// Appends the row with index `row_count()`.
    pub fn generate_next_row(&mut self) {
        let row = match self.rows.last() {
            None => Row::base(),
            Some(last) => last.successor(),
        };
        debug!("generated row {} with {} cells", row.index, row.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or_else(|| TriangleError::OutOfRange {
            reason: format!(
                "row {index} not generated (triangle has {} rows)",
                self.rows.len()
            ),
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let r = self.row(row)?;
        r.cells.get(col).ok_or_else(|| TriangleError::OutOfRange {
            reason: format!("column {col} not in 0..={row} for row {row}"),
        })
    }

    /// Sum of row `index`; equals `2^index`.
    pub fn row_sum(&self, index: usize) -> Result<BigUint> {
        Ok(self.row(index)?.sum())
    }

    /// Where cell `(row, col)` currently sits: resting layout position plus
    /// the triangle origin and the row's own offset.
    pub fn cell_position(&self, row: usize, col: usize) -> Result<Position> {
        let r = self.row(row)?;
        if col >= r.len() {
            return Err(TriangleError::OutOfRange {
                reason: format!("column {col} not in 0..={row} for row {row}"),
            });
        }
        let resting = self.layout.cell_position(row, col);
        Ok(resting
            .shifted(self.origin.x, self.origin.y)
            .shifted(r.offset.x, r.offset.y))
    }

    /// Move the whole triangle.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.shifted(dx, dy);
    }

    /// Move one row relative to its resting position. Moves made to the
    /// focused row are undone by [`TriangleBuilder::unfocus`].
    pub fn translate_row(&mut self, index: usize, dx: f64, dy: f64) -> Result<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| TriangleError::OutOfRange {
                reason: format!("row {index} not generated (triangle has {len} rows)"),
            })?;
        row.offset = row.offset.shifted(dx, dy);
        Ok(())
    }

    /// Marks `index` as the focused row and snapshots its current state.
    ///
    /// Fails with `OutOfRange` if the row does not exist yet and with
    /// `InvalidState` if another row is already focused.
    pub fn focus_on(&mut self, index: usize) -> Result<&Row> {
        if let Some(focused) = self.focus.focused_row() {
            return Err(TriangleError::InvalidState {
                reason: format!("row {focused} is already focused"),
            });
        }
        let snapshot = self.row(index)?.clone();
        debug!("focusing row {index}");
        self.focus = FocusState::Focused {
            row: index,
            snapshot,
        };
        self.row(index)
    }

    /// Clears the focus and restores the focused row to its snapshot.
    ///
    /// Fails with `InvalidState` when no row is focused.
    pub fn unfocus(&mut self) -> Result<()> {
        match std::mem::take(&mut self.focus) {
            FocusState::Unfocused => Err(TriangleError::InvalidState {
                reason: "no row is focused".into(),
            }),
            FocusState::Focused { row, snapshot } => {
                debug!("unfocusing row {row}");
                self.rows[row] = snapshot;
                Ok(())
            }
        }
    }

    /// Index of the currently focused row, if any.
    pub fn focused_row(&self) -> Option<usize> {
        self.focus.focused_row()
    }
}
