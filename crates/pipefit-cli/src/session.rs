//! Executes commands against a design and reports the results.

use std::io::{self, BufRead, Write};

use pipefit_core::Position;
use pipefit_design::{Design, DesignError, PlacementChange, Tool};

use crate::{
    command::{Command, HELP},
    error::AppError,
    render::{EdgesView, GridView, PaletteView},
    settings::Settings,
};

/// What the input loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Continue,
    Rejected,
    Quit,
}

/// Totals reported when an input stream has been consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) executed: usize,
    pub(crate) rejected: usize,
    /// The run stopped on a rejection in strict mode.
    pub(crate) aborted: bool,
}

#[derive(Debug)]
pub(crate) struct Session {
    design: Design,
    settings: Settings,
}

impl Session {
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            design: Design::new(),
            settings,
        }
    }

    #[cfg(test)]
    pub(crate) fn design(&self) -> &Design {
        &self.design
    }

    /// Reads commands line by line until the input ends or `quit` is given.
    pub(crate) fn run<R, W>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: bool,
    ) -> Result<Summary, AppError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "pipefit> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if self.settings.echo {
                writeln!(out, "> {line}")?;
            }

            let outcome = match Command::parse_line(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(command, out)?,
                Err(e) => {
                    log::warn!("cannot parse {line:?}: {e}");
                    writeln!(out, "error: {e}")?;
                    Outcome::Rejected
                }
            };
            summary.executed += 1;
            match outcome {
                Outcome::Continue => {}
                Outcome::Rejected => {
                    summary.rejected += 1;
                    if self.settings.strict {
                        summary.aborted = true;
                        break;
                    }
                }
                Outcome::Quit => break,
            }
        }
        Ok(summary)
    }

    pub(crate) fn execute<W>(&mut self, command: Command, out: &mut W) -> io::Result<Outcome>
    where
        W: Write,
    {
        match command {
            Command::Select(tool) => {
                self.design.select(tool);
                writeln!(out, "{}", PaletteView(self.design.palette()))?;
            }
            Command::Rotate(rotation) => match self.design.rotate_selected(rotation) {
                Some((shape, orientation)) => writeln!(
                    out,
                    "{shape} turned to {orientation} ({} grad)",
                    orientation.grad()
                )?,
                None => writeln!(out, "no shape selected to rotate")?,
            },
            Command::Escape => {
                self.design.clear_selection();
                writeln!(out, "{}", PaletteView(self.design.palette()))?;
            }
            Command::Click(pos) => {
                let result = self.design.click(pos);
                return self.report(pos, result, out);
            }
            Command::Place {
                pos,
                shape,
                orientation,
            } => {
                let orientation =
                    orientation.unwrap_or_else(|| self.design.palette().orientation(shape));
                let result = self.design.place(pos, shape, orientation);
                return self.report(pos, result, out);
            }
            Command::Delete(pos) => {
                let result = self.design.delete(pos);
                return self.report(pos, result, out);
            }
            Command::Preview(pos) => self.preview(pos, out)?,
            Command::Show => {
                write!(out, "{}", GridView(&self.design))?;
                writeln!(out, "{}", PaletteView(self.design.palette()))?;
            }
            Command::Edges => write!(out, "{}", EdgesView(self.design.registry()))?,
            Command::Reset => {
                self.design.reset();
                writeln!(out, "grid cleared")?;
                self.auto_show(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    fn report<W>(
        &self,
        pos: Position,
        result: Result<PlacementChange, DesignError>,
        out: &mut W,
    ) -> io::Result<Outcome>
    where
        W: Write,
    {
        let change = match result {
            Ok(change) => change,
            Err(e) => {
                log::warn!("rejected at position {pos}: {e}");
                writeln!(out, "rejected: {e}")?;
                return Ok(Outcome::Rejected);
            }
        };

        let current = self.design.placement(pos);
        match (change, current) {
            (PlacementChange::Unchanged, Some(current)) => writeln!(
                out,
                "position {pos} already holds {} at {}",
                current.shape, current.orientation
            )?,
            (PlacementChange::Placed, Some(current)) => writeln!(
                out,
                "placed {} at {} on position {pos}",
                current.shape, current.orientation
            )?,
            (PlacementChange::Replaced { previous }, Some(current)) => writeln!(
                out,
                "replaced {} with {} at {} on position {pos}",
                previous.shape, current.shape, current.orientation
            )?,
            (PlacementChange::Removed { previous }, _) => {
                writeln!(out, "removed {} from position {pos}", previous.shape)?;
            }
            (_, None) => writeln!(out, "position {pos} is empty")?,
        }
        if !change.is_unchanged() {
            self.auto_show(out)?;
        }
        Ok(Outcome::Continue)
    }

    fn preview<W>(&self, pos: Position, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let tool = self.design.palette().selected();
        match (self.design.click_capability(pos), tool) {
            (Ok(PlacementChange::Unchanged), _) => {
                writeln!(out, "position {pos}: no change")
            }
            (Ok(PlacementChange::Removed { previous }), _) => {
                writeln!(out, "position {pos}: would remove {}", previous.shape)
            }
            (Ok(_), Some(Tool::Shape(shape))) => writeln!(
                out,
                "position {pos}: {shape} at {} fits",
                self.design.palette().orientation(shape)
            ),
            (Ok(_), _) => writeln!(out, "position {pos}: fits"),
            (Err(e), _) => writeln!(out, "position {pos}: {e}"),
        }
    }

    fn auto_show<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        if self.settings.auto_show {
            write!(out, "{}", GridView(&self.design))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pipefit_core::{Orientation, Shape};

    use super::*;

    fn quiet() -> Settings {
        Settings {
            auto_show: false,
            ..Settings::default()
        }
    }

    fn run(session: &mut Session, script: &str) -> (Summary, String) {
        let mut out = Vec::new();
        let summary = session
            .run(script.as_bytes(), &mut out, false)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_builds_design() {
        let mut session = Session::new(quiet());
        let (summary, out) = run(
            &mut session,
            "# corner loop\n\
             select elbow\n\
             click 1\n\
             rotate\n\
             click 4\n\
             \n\
             place 2 elbow 3\n",
        );
        assert_eq!(
            summary,
            Summary {
                executed: 5,
                rejected: 0,
                aborted: false,
            }
        );
        assert!(out.contains("placed elbow at 0 on position 1"));
        assert!(out.contains("placed elbow at 1 on position 4"));
        let design = session.design();
        assert_eq!(design.placements().count(), 3);
        assert_eq!(
            design.placement(Position::new(2)).map(|p| p.orientation),
            Some(Orientation::new(3))
        );
    }

    #[test]
    fn test_rejection_is_reported_and_counted() {
        let mut session = Session::new(quiet());
        let (summary, out) = run(
            &mut session,
            "place 1 cross\nplace 4 straight\nclick 9\nbogus\nshow\n",
        );
        assert_eq!(summary.executed, 5);
        assert_eq!(summary.rejected, 3);
        assert!(!summary.aborted);
        assert!(out.contains(
            "rejected: piece does not fit: top edge required closed but open: \
             row boundary 1 at column 1 is held by position 1"
        ));
        assert!(out.contains("rejected: no shape selected"));
        assert!(out.contains("error: unknown command \"bogus\""));
        assert!(session.design().placement(Position::new(4)).is_none());
    }

    #[test]
    fn test_strict_stops_at_first_rejection() {
        let mut session = Session::new(Settings {
            strict: true,
            ..quiet()
        });
        let (summary, _) = run(&mut session, "delete 5\nplace 5 cross\n");
        assert_eq!(summary.executed, 1);
        assert!(summary.aborted);
        assert!(session.design().is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = Session::new(quiet());
        let (summary, _) = run(&mut session, "place 5 tee\nquit\nplace 1 tee\n");
        assert_eq!(summary.executed, 2);
        assert_eq!(session.design().placements().count(), 1);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let mut session = Session::new(quiet());
        let (_, out) = run(
            &mut session,
            "place 5 cross\nselect straight\npreview 2\npreview 4\n",
        );
        assert!(out.contains(
            "position 2: piece does not fit: bottom edge required closed but open"
        ));
        assert!(out.contains("position 4: straight at 0 fits"));
        assert_eq!(session.design().placements().count(), 1);
    }

    #[test]
    fn test_auto_show_and_echo() {
        let mut session = Session::new(Settings {
            echo: true,
            ..Settings::default()
        });
        let (_, out) = run(&mut session, "place 5 cross\nplace 5 cross\n");
        assert!(out.starts_with("> place 5 cross\n"));
        // The grid follows the first placement only.
        assert_eq!(out.matches("+---+---+---+").count(), 4);
        assert!(out.contains("position 5 already holds cross at 0"));
    }

    #[test]
    fn test_replace_and_delete_messages() {
        let mut session = Session::new(quiet());
        let mut out = Vec::new();
        let pos = Position::new(3);
        session
            .execute(
                Command::Place {
                    pos,
                    shape: Shape::Tee,
                    orientation: None,
                },
                &mut out,
            )
            .unwrap();
        session
            .execute(
                Command::Place {
                    pos,
                    shape: Shape::Elbow,
                    orientation: Some(Orientation::new(2)),
                },
                &mut out,
            )
            .unwrap();
        assert_eq!(
            session.execute(Command::Delete(pos), &mut out).unwrap(),
            Outcome::Continue
        );
        assert_eq!(
            session.execute(Command::Delete(pos), &mut out).unwrap(),
            Outcome::Rejected
        );
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("replaced tee with elbow at 2 on position 3"));
        assert!(out.contains("removed elbow from position 3"));
        assert!(out.contains("rejected: position 3 is empty"));
    }
}
