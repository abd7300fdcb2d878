//! Fixed-size rectangular cell storage addressed through a bounded region.

use crate::{Coord, GridError, Rect};

/// Rectangular array of homogeneous cell values.
///
/// The grid owns its cell storage exclusively and keeps
/// `cells.len() == region.area()` at all times; cells are addressed in
/// row-major order. The size is fixed after construction, only the cell
/// values mutate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    region: Rect,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid from explicit dimensions and row-major cell storage.
    ///
    /// Fails with [`GridError::SizeMismatch`] when the storage length does
    /// not equal `width * height`.
    pub fn new(width: i32, height: i32, cells: Vec<T>) -> Result<Self, GridError> {
        let region = Rect::from_zero(Coord::new(width, height));
        let expected = usize::try_from(region.area()).unwrap_or(0);
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { region, cells })
    }

    /// Parses a textual map through a glyph legend.
    ///
    /// The block is trimmed of surrounding whitespace and split into rows,
    /// each row trimmed again; every row must contain the same number of
    /// glyphs. Each glyph maps through `legend`, which returns `None` for
    /// unrecognized characters. Row order maps to increasing `y`, column
    /// order to increasing `x`.
    pub fn parse<F>(text: &str, legend: F) -> Result<Self, GridError>
    where
        F: Fn(char) -> Option<T>,
    {
        let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::NoRows);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in &rows {
            if row.chars().count() != width {
                return Err(GridError::UnequalRowLengths);
            }
            for glyph in row.chars() {
                match legend(glyph) {
                    Some(value) => cells.push(value),
                    None => return Err(GridError::UnknownGlyph(glyph)),
                }
            }
        }

        Self::new(width as i32, rows.len() as i32, cells)
    }

    /// Bounded region that addresses the grid.
    #[must_use]
    pub const fn region(&self) -> Rect {
        self.region
    }

    /// Row-major view of the underlying cell storage.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns the cell at the coordinate, or [`GridError::OutOfBounds`].
    pub fn at(&self, c: Coord) -> Result<&T, GridError> {
        if !self.region.in_bounds(c) {
            return Err(GridError::OutOfBounds);
        }
        Ok(&self.cells[self.index_of(c)])
    }

    /// Returns a mutable handle to the cell at the coordinate, or
    /// [`GridError::OutOfBounds`].
    pub fn at_mut(&mut self, c: Coord) -> Result<&mut T, GridError> {
        if !self.region.in_bounds(c) {
            return Err(GridError::OutOfBounds);
        }
        let index = self.index_of(c);
        Ok(&mut self.cells[index])
    }

    /// Overwrites the cell at the coordinate, or fails with
    /// [`GridError::OutOfBounds`] without mutating anything.
    pub fn put(&mut self, c: Coord, value: T) -> Result<(), GridError> {
        *self.at_mut(c)? = value;
        Ok(())
    }

    /// Renders the grid as newline-terminated rows in row-major order.
    ///
    /// The callback receives each cell together with its coordinate and must
    /// return a non-empty glyph; an empty result signals a caller bug in the
    /// legend and fails with [`GridError::BlankGlyph`].
    pub fn stringify<F>(&self, render: F) -> Result<String, GridError>
    where
        F: Fn(&T, Coord) -> String,
    {
        let tl = self.region.top_left();
        let br = self.region.bottom_right();
        let mut out = String::new();
        for y in tl.y()..br.y() {
            for x in tl.x()..br.x() {
                let c = Coord::new(x, y);
                let glyph = render(self.at(c)?, c);
                if glyph.is_empty() {
                    return Err(GridError::BlankGlyph);
                }
                out.push_str(&glyph);
            }
            out.push('\n');
        }
        Ok(out)
    }

    fn index_of(&self, c: Coord) -> usize {
        let rel = c - self.region.top_left();
        rel.y() as usize * self.region.size().x() as usize + rel.x() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::{Coord, GridError};

    fn floor_legend(glyph: char) -> Option<bool> {
        match glyph {
            '.' => Some(false),
            '#' => Some(true),
            _ => None,
        }
    }

    #[test]
    fn parses_all_floor_legend() {
        let grid = Grid::parse("...\n...\n...", floor_legend).expect("parse");
        assert_eq!(grid.region().size(), Coord::new(3, 3));
        assert_eq!(grid.at(Coord::new(1, 1)), Ok(&false));
        assert_eq!(grid.at(Coord::new(3, 0)), Err(GridError::OutOfBounds));
    }

    #[test]
    fn parse_trims_indented_rows() {
        let text = "
            ###
            #.#
            ###
        ";
        let grid = Grid::parse(text, floor_legend).expect("parse");
        assert_eq!(grid.at(Coord::new(0, 0)), Ok(&true));
        assert_eq!(grid.at(Coord::new(1, 1)), Ok(&false));
        assert_eq!(grid.at(Coord::new(2, 2)), Ok(&true));
    }

    #[test]
    fn parse_rejects_unequal_rows() {
        assert_eq!(
            Grid::parse("..\n...", floor_legend),
            Err(GridError::UnequalRowLengths)
        );
    }

    #[test]
    fn parse_rejects_unknown_glyphs() {
        assert_eq!(
            Grid::parse("..\n.x", floor_legend),
            Err(GridError::UnknownGlyph('x'))
        );
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(Grid::parse("   \n  ", floor_legend), Err(GridError::NoRows));
    }

    #[test]
    fn new_rejects_mismatched_storage() {
        assert_eq!(
            Grid::new(2, 2, vec![false; 3]),
            Err(GridError::SizeMismatch {
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn put_writes_in_bounds_only() {
        let mut grid = Grid::new(2, 1, vec![0_u8, 0]).expect("grid");
        assert_eq!(grid.put(Coord::new(1, 0), 7), Ok(()));
        assert_eq!(grid.at(Coord::new(1, 0)), Ok(&7));
        assert_eq!(grid.put(Coord::new(2, 0), 9), Err(GridError::OutOfBounds));
    }

    #[test]
    fn at_mut_allows_in_place_mutation() {
        let mut grid = Grid::new(1, 1, vec![1_u8]).expect("grid");
        *grid.at_mut(Coord::new(0, 0)).expect("cell") += 1;
        assert_eq!(grid.at(Coord::new(0, 0)), Ok(&2));
    }

    #[test]
    fn stringify_renders_rows_with_newlines() {
        let grid = Grid::parse("#.\n.#", floor_legend).expect("parse");
        let text = grid
            .stringify(|wall, _| if *wall { "#".to_string() } else { ".".to_string() })
            .expect("stringify");
        assert_eq!(text, "#.\n.#\n");
    }

    #[test]
    fn stringify_rejects_blank_glyphs() {
        let grid = Grid::parse("..", floor_legend).expect("parse");
        assert_eq!(
            grid.stringify(|_, _| String::new()),
            Err(GridError::BlankGlyph)
        );
    }

    #[test]
    fn stringify_passes_cell_coordinates() {
        let grid = Grid::parse("..\n..", floor_legend).expect("parse");
        let text = grid
            .stringify(|_, c| {
                if c == Coord::new(1, 1) {
                    "@".to_string()
                } else {
                    ".".to_string()
                }
            })
            .expect("stringify");
        assert_eq!(text, "..\n.@\n");
    }
}
