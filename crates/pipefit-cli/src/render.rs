//! Text views of a design.

use std::fmt;

use pipefit_core::{Direction, GRID_SIZE, Position, Shape};
use pipefit_design::{Design, Palette, Placement, Tool};
use pipefit_engine::{EdgeRegistry, Requirement};

const SEPARATOR: &str = "+---+---+---+";

/// The grid, three text lines per row of cells.
///
/// A placed piece is drawn as a `+` hub with a spoke on each open side; an
/// empty cell shows its position number.
pub(crate) struct GridView<'a>(pub(crate) &'a Design);

impl GridView<'_> {
    fn cell_line(placement: Option<Placement>, pos: Position, line: usize) -> [char; 3] {
        let Some(placement) = placement else {
            return if line == 1 {
                [' ', char::from(b'0' + pos.number()), ' ']
            } else {
                [' '; 3]
            };
        };
        let open = placement.open_sides();
        let spoke = |side, c| if open.contains(side) { c } else { ' ' };
        match line {
            0 => [' ', spoke(Direction::Top, '|'), ' '],
            1 => [spoke(Direction::Left, '-'), '+', spoke(Direction::Right, '-')],
            _ => [' ', spoke(Direction::Bottom, '|'), ' '],
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for row in 0..GRID_SIZE {
            for line in 0..3 {
                write!(f, "|")?;
                for column in 0..GRID_SIZE {
                    let pos = Position::from_row_column(row, column);
                    for c in Self::cell_line(self.0.placement(pos), pos, line) {
                        write!(f, "{c}")?;
                    }
                    write!(f, "|")?;
                }
                writeln!(f)?;
            }
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Both registry tables, one boundary per line.
pub(crate) struct EdgesView<'a>(pub(crate) &'a EdgeRegistry);

impl fmt::Display for EdgesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for requirement in Requirement::ALL {
            writeln!(f, "{} edges:", requirement.table_name())?;
            let mut any = false;
            for (boundary, positions) in self.0.entries(requirement) {
                any = true;
                write!(f, "  {boundary}:")?;
                for pos in positions {
                    write!(f, " {pos}")?;
                }
                writeln!(f)?;
            }
            if !any {
                writeln!(f, "  (none)")?;
            }
        }
        Ok(())
    }
}

/// The selected tool followed by every shape's orientation.
pub(crate) struct PaletteView<'a>(pub(crate) &'a Palette);

impl fmt::Display for PaletteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.0;
        match palette.selected() {
            None => write!(f, "selected: nothing")?,
            Some(Tool::Delete) => write!(f, "selected: delete")?,
            Some(Tool::Shape(shape)) => {
                let orientation = palette.orientation(shape);
                write!(
                    f,
                    "selected: {shape} at {orientation} ({} grad)",
                    orientation.grad()
                )?;
            }
        }
        write!(f, " |")?;
        for shape in Shape::ALL {
            write!(f, " {shape} {}", palette.orientation(shape))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pipefit_core::Orientation;
    use pipefit_design::Rotation;

    use super::*;

    #[test]
    fn test_empty_grid_shows_numbers() {
        let design = Design::new();
        let expected = "\
+---+---+---+
|   |   |   |
| 1 | 2 | 3 |
|   |   |   |
+---+---+---+
|   |   |   |
| 4 | 5 | 6 |
|   |   |   |
+---+---+---+
|   |   |   |
| 7 | 8 | 9 |
|   |   |   |
+---+---+---+
";
        assert_eq!(GridView(&design).to_string(), expected);
    }

    #[test]
    fn test_pieces_draw_open_sides() {
        let mut design = Design::new();
        design
            .place(Position::new(1), Shape::Elbow, Orientation::BASE)
            .unwrap();
        design
            .place(Position::new(2), Shape::Straight, Orientation::new(1))
            .unwrap();
        let text = GridView(&design).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "|   | | |   |");
        assert_eq!(lines[2], "|-+ | + | 3 |");
        assert_eq!(lines[3], "| | | | |   |");
    }

    #[test]
    fn test_edges_view() {
        let mut design = Design::new();
        assert_eq!(
            EdgesView(design.registry()).to_string(),
            "enabled edges:\n  (none)\ndisabled edges:\n  (none)\n"
        );

        design
            .place(Position::new(5), Shape::Straight, Orientation::BASE)
            .unwrap();
        let text = EdgesView(design.registry()).to_string();
        assert!(text.contains("enabled edges:\n  column boundary 1 at row 2: 5\n"));
        assert!(text.contains("  row boundary 1 at column 2: 5\n"));
    }

    #[test]
    fn test_palette_view() {
        let mut design = Design::new();
        assert_eq!(
            PaletteView(design.palette()).to_string(),
            "selected: nothing | cross 0 tee 0 straight 0 elbow 0"
        );

        design.select(Tool::Shape(Shape::Tee));
        design.rotate_selected(Rotation::Clockwise);
        assert!(
            PaletteView(design.palette())
                .to_string()
                .starts_with("selected: tee at 1 (100 grad) |")
        );
    }
}
