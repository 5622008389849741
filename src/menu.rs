//! Interactive text menu.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`, so the whole loop can
//! be driven from memory in tests. End of input behaves like choosing exit.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};
use rand::rngs::StdRng;
use shellsort::Direction;

use crate::config::{ExperimentConfig, DEMO_LEN};
use crate::data::ElementKind;
use crate::demo;
use crate::error::{Error, Result};
use crate::experiment;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Demo,
    Experiments,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Demo),
            "2" => Ok(MenuChoice::Experiments),
            "0" => Ok(MenuChoice::Exit),
            other => Err(Error::InvalidChoice(other.into())),
        }
    }
}

pub fn parse_kind(s: &str) -> Result<ElementKind> {
    match s.trim() {
        "1" => Ok(ElementKind::Numbers),
        "2" => Ok(ElementKind::Strings),
        "3" => Ok(ElementKind::People),
        other => Err(Error::InvalidChoice(other.into())),
    }
}

pub fn parse_direction(s: &str) -> Result<Direction> {
    match s.trim() {
        "1" => Ok(Direction::Ascending),
        "2" => Ok(Direction::Descending),
        other => Err(Error::InvalidChoice(other.into())),
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    config: ExperimentConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: ExperimentConfig) -> Self {
        let rng = config.rng();

        Self {
            input,
            output,
            config,
            rng,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n1 - Demonstration")?;
            writeln!(self.output, "2 - Full experiments + charts")?;
            writeln!(self.output, "0 - Exit")?;

            let Some(line) = self.prompt()? else {
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Demo) => self.demo()?,
                Ok(MenuChoice::Experiments) => {
                    experiment::run(&self.config, &mut self.output)?;
                    writeln!(self.output, "\nExperiments finished!")?;
                }
                Ok(MenuChoice::Exit) => break,
                Err(err) => self.invalid(&err)?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn demo(&mut self) -> Result<()> {
        writeln!(self.output, "\nSHELL SORT DEMONSTRATION")?;
        writeln!(self.output, "1 - Numbers")?;
        writeln!(self.output, "2 - Strings")?;
        writeln!(self.output, "3 - People")?;
        let Some(line) = self.prompt()? else {
            return Ok(());
        };
        let kind = match parse_kind(&line) {
            Ok(kind) => kind,
            Err(err) => return self.invalid(&err),
        };

        writeln!(self.output, "\n1 - Ascending")?;
        writeln!(self.output, "2 - Descending")?;
        let Some(line) = self.prompt()? else {
            return Ok(());
        };
        let direction = match parse_direction(&line) {
            Ok(direction) => direction,
            Err(err) => return self.invalid(&err),
        };

        demo::run(
            kind,
            direction,
            DEMO_LEN,
            self.config.string_len,
            &mut self.rng,
            &mut self.output,
        )?;
        writeln!(self.output, "\nDemonstration finished!")?;

        Ok(())
    }

    fn invalid(&mut self, err: &Error) -> Result<()> {
        warn!("{err}");
        writeln!(self.output, "Invalid choice!")?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "Choice: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}
