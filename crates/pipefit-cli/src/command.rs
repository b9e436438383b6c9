//! Line commands understood by the interactive front end.

use std::str::FromStr;

use pipefit_core::{
    Orientation, ParseOrientationError, ParsePositionError, ParseShapeError, Position, Shape,
};
use pipefit_design::{Rotation, Tool};

pub(crate) const HELP: &str = "\
commands:
  select <shape|delete>     pick a palette tool (again to deselect)   [s]
  rotate [cw|ccw]           rotate the selected shape                 [r, R = ccw]
  click <pos>               apply the selected tool to a cell         [c]
  preview <pos>             show what a click would do                [p]
  place <pos> <shape> [o]   put a piece at a cell directly
  delete <pos>              remove the piece at a cell                [d]
  escape                    clear the selection                       [esc]
  show                      print the grid
  edges                     print the open/closed boundary tables
  reset                     clear the grid
  help                      print this message
  quit                      leave                                     [exit]
shapes: cross (+), tee (t), straight (i), elbow (l); positions 1-9; orientation 0-3";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Select(Tool),
    Rotate(Rotation),
    Click(Position),
    Preview(Position),
    Place {
        pos: Position,
        shape: Shape,
        orientation: Option<Orientation>,
    },
    Delete(Position),
    Escape,
    Show,
    Edges,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CommandError {
    #[display("unknown command {_0:?} (try `help`)")]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),
    #[display("`{command}` needs a {what}")]
    #[from(ignore)]
    MissingArgument { command: String, what: &'static str },
    #[display("unexpected argument {_0:?}")]
    #[from(ignore)]
    ExtraArgument(#[error(not(source))] String),
    #[display("unknown rotation {_0:?}: expected cw or ccw")]
    #[from(ignore)]
    Rotation(#[error(not(source))] String),
    #[display("{_0}")]
    Position(#[from] ParsePositionError),
    #[display("{_0}")]
    Shape(#[from] ParseShapeError),
    #[display("{_0}")]
    Orientation(#[from] ParseOrientationError),
}

struct Args<'a> {
    command: &'a str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, what: &'static str) -> Result<&'a str, CommandError> {
        self.words
            .next()
            .ok_or_else(|| CommandError::MissingArgument {
                command: self.command.to_owned(),
                what,
            })
    }

    fn optional(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    fn finish<T>(mut self, value: T) -> Result<T, CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::ExtraArgument(extra.to_owned())),
            None => Ok(value),
        }
    }
}

fn parse_tool(word: &str) -> Result<Tool, CommandError> {
    if word.eq_ignore_ascii_case("delete") || word.eq_ignore_ascii_case("del") {
        return Ok(Tool::Delete);
    }
    Ok(Tool::Shape(word.parse()?))
}

fn parse_rotation(word: Option<&str>) -> Result<Rotation, CommandError> {
    match word.map(str::to_ascii_lowercase).as_deref() {
        None | Some("cw") => Ok(Rotation::Clockwise),
        Some("ccw") => Ok(Rotation::CounterClockwise),
        Some(other) => Err(CommandError::Rotation(other.to_owned())),
    }
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub(crate) fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };

        // `r` and `R` mirror the rotate keys and are case-sensitive.
        if head == "R" {
            let args = Args {
                command: head,
                words,
            };
            return args.finish(Self::Rotate(Rotation::CounterClockwise));
        }

        let mut args = Args {
            command: head,
            words,
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "select" | "s" => Self::Select(parse_tool(args.required("tool")?)?),
            "rotate" | "r" => Self::Rotate(parse_rotation(args.optional())?),
            "click" | "c" => Self::Click(args.required("position")?.parse()?),
            "preview" | "p" | "hover" => Self::Preview(args.required("position")?.parse()?),
            "place" => {
                let pos = args.required("position")?.parse()?;
                let shape = args.required("shape")?.parse()?;
                let orientation = args.optional().map(str::parse).transpose()?;
                Self::Place {
                    pos,
                    shape,
                    orientation,
                }
            }
            "delete" | "d" => Self::Delete(args.required("position")?.parse()?),
            "escape" | "esc" => Self::Escape,
            "show" => Self::Show,
            "edges" => Self::Edges,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(head.to_owned())),
        };
        args.finish(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command, CommandError> {
        s.parse()
    }

    #[test]
    fn test_parse_palette_commands() {
        assert_eq!(parse("select elbow"), Ok(Command::Select(Tool::Shape(Shape::Elbow))));
        assert_eq!(parse("s T"), Ok(Command::Select(Tool::Shape(Shape::Tee))));
        assert_eq!(parse("select delete"), Ok(Command::Select(Tool::Delete)));
        assert_eq!(parse("rotate"), Ok(Command::Rotate(Rotation::Clockwise)));
        assert_eq!(parse("rotate ccw"), Ok(Command::Rotate(Rotation::CounterClockwise)));
        assert_eq!(parse("r"), Ok(Command::Rotate(Rotation::Clockwise)));
        assert_eq!(parse("R"), Ok(Command::Rotate(Rotation::CounterClockwise)));
        assert_eq!(parse("esc"), Ok(Command::Escape));
    }

    #[test]
    fn test_parse_cell_commands() {
        assert_eq!(parse("click 5"), Ok(Command::Click(Position::new(5))));
        assert_eq!(parse("p 9"), Ok(Command::Preview(Position::new(9))));
        assert_eq!(parse("d 1"), Ok(Command::Delete(Position::new(1))));
        assert_eq!(
            parse("place 4 straight 1"),
            Ok(Command::Place {
                pos: Position::new(4),
                shape: Shape::Straight,
                orientation: Some(Orientation::new(1)),
            })
        );
        assert_eq!(
            parse("PLACE 2 cross"),
            Ok(Command::Place {
                pos: Position::new(2),
                shape: Shape::Cross,
                orientation: None,
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("jump"), Err(CommandError::Unknown("jump".to_owned())));
        assert_eq!(
            parse("click"),
            Err(CommandError::MissingArgument {
                command: "click".to_owned(),
                what: "position",
            })
        );
        assert_eq!(
            parse("show 3"),
            Err(CommandError::ExtraArgument("3".to_owned()))
        );
        assert!(matches!(parse("click 0"), Err(CommandError::Position(_))));
        assert!(matches!(parse("select pipe"), Err(CommandError::Shape(_))));
        assert!(matches!(
            parse("place 1 tee 7"),
            Err(CommandError::Orientation(_))
        ));
        assert!(matches!(parse("rotate left"), Err(CommandError::Rotation(_))));
    }

    #[test]
    fn test_value_errors_convert_and_display() {
        let err = CommandError::from("10".parse::<Position>().unwrap_err());
        assert_eq!(err.to_string(), "invalid position \"10\": expected 1-9");
        let err = CommandError::from("pipe".parse::<Shape>().unwrap_err());
        assert!(matches!(err, CommandError::Shape(_)));
        assert_eq!(
            CommandError::Unknown("jump".to_owned()).to_string(),
            "unknown command \"jump\" (try `help`)"
        );
    }

    #[test]
    fn test_parse_line_skips_blanks_and_comments() {
        assert_eq!(Command::parse_line(""), Ok(None));
        assert_eq!(Command::parse_line("   # just a note"), Ok(None));
        assert_eq!(
            Command::parse_line("click 3 # top-right"),
            Ok(Some(Command::Click(Position::new(3))))
        );
    }
}
