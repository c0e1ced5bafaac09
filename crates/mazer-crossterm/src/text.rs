//! Plain-text rendering of a maze grid.

use std::io::{self, Write};

use mazer_core::{Grid, Point, VisitedMap};

/// How one maze cell is drawn: each glyph is a fixed-width block of
/// characters, repeated over `cell_height` screen rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub wall: String,
    pub floor: String,
    /// Solver's current position.
    pub player: String,
    /// Cells the solver has moved through.
    pub trail: String,
    pub cell_height: u16,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(3, 1, '#')
    }
}

impl Glyphs {
    /// Glyphs `cell_width` characters wide, with `wall_char` for walls.
    ///
    /// The player and trail markers are centred in the block.
    pub fn new(cell_width: usize, cell_height: u16, wall_char: char) -> Self {
        let cell_width = cell_width.max(1);
        let marker = |c: char| {
            let left = (cell_width - 1) / 2;
            let mut s = " ".repeat(left);
            s.push(c);
            s.push_str(&" ".repeat(cell_width - 1 - left));
            s
        };
        Self {
            wall: wall_char.to_string().repeat(cell_width),
            floor: " ".repeat(cell_width),
            player: marker('P'),
            trail: marker('.'),
            cell_height: cell_height.max(1),
        }
    }

    /// Screen columns per cell.
    pub fn cell_width(&self) -> usize {
        self.floor.chars().count()
    }
}

/// One text line per screen row, top to bottom: walls as `glyphs.wall`,
/// floor as `glyphs.floor`, each maze row repeated `cell_height` times.
pub fn maze_lines(grid: &Grid, glyphs: &Glyphs) -> Vec<String> {
    lines_with(grid, glyphs, |_| false)
}

/// Like [`maze_lines`], with the cells of `path` drawn as `glyphs.trail`.
pub fn solution_lines(grid: &Grid, glyphs: &Glyphs, path: &[Point]) -> Vec<String> {
    let mut on_path = VisitedMap::new(grid.dims());
    for &p in path.iter().filter(|&&p| grid.contains(p)) {
        on_path.visit(p);
    }
    lines_with(grid, glyphs, |p| on_path.is_visited(p))
}

fn lines_with(grid: &Grid, glyphs: &Glyphs, marked: impl Fn(Point) -> bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.height() as usize * glyphs.cell_height as usize);
    for (y, row) in grid.rows().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, &open)| {
                if !open {
                    glyphs.wall.as_str()
                } else if marked(Point::new(x as i32, y as i32)) {
                    glyphs.trail.as_str()
                } else {
                    glyphs.floor.as_str()
                }
            })
            .collect();
        for _ in 0..glyphs.cell_height {
            lines.push(line.clone());
        }
    }
    lines
}

/// Write [`maze_lines`] to `out`, one `\n`-terminated line per row.
pub fn write_maze<W: Write>(grid: &Grid, glyphs: &Glyphs, out: &mut W) -> io::Result<()> {
    for line in maze_lines(grid, glyphs) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::from_ascii(&["#####", "#   #", "#####"]).unwrap()
    }

    #[test]
    fn default_glyphs_are_three_wide() {
        let g = Glyphs::default();
        assert_eq!(g.wall, "###");
        assert_eq!(g.floor, "   ");
        assert_eq!(g.player, " P ");
        assert_eq!(g.trail, " . ");
        assert_eq!(g.cell_width(), 3);
    }

    #[test]
    fn custom_glyph_width() {
        let g = Glyphs::new(2, 1, '█');
        assert_eq!(g.wall, "██");
        assert_eq!(g.player, "P ");
        assert_eq!(Glyphs::new(0, 0, '#').cell_width(), 1);
        assert_eq!(Glyphs::new(0, 0, '#').cell_height, 1);
    }

    #[test]
    fn lines_follow_the_grid() {
        let lines = maze_lines(&corridor(), &Glyphs::default());
        assert_eq!(
            lines,
            vec![
                "###############".to_string(),
                "###         ###".to_string(),
                "###############".to_string(),
            ]
        );
    }

    #[test]
    fn tall_cells_repeat_rows() {
        let lines = maze_lines(&corridor(), &Glyphs::new(1, 2, '#'));
        assert_eq!(
            lines,
            vec!["#####", "#####", "#   #", "#   #", "#####", "#####"]
        );
    }

    #[test]
    fn solution_path_is_drawn_as_trail() {
        let path = [Point::new(1, 1), Point::new(2, 1)];
        let lines = solution_lines(&corridor(), &Glyphs::new(1, 1, '#'), &path);
        assert_eq!(lines, vec!["#####", "#.. #", "#####"]);
        // Points outside the grid and on walls are ignored.
        let stray = [Point::new(9, 9), Point::new(0, 0)];
        let lines = solution_lines(&corridor(), &Glyphs::new(1, 1, '#'), &stray);
        assert_eq!(lines, maze_lines(&corridor(), &Glyphs::new(1, 1, '#')));
    }

    #[test]
    fn write_maze_terminates_every_line() {
        let mut out = Vec::new();
        write_maze(&corridor(), &Glyphs::new(1, 1, '#'), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#####\n#   #\n#####\n");
    }
}
