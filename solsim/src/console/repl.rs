//! The interactive loop: prompt, read, dispatch, print.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use log::{info, warn};

use super::input::{parse_int, InputError};
use super::Command;
use crate::simulation::driver::Driver;
use crate::simulation::scenario::{Scenario, MAX_ORBITING_BODIES};

const BODY_RANGE: RangeInclusive<i64> = 1..=MAX_ORBITING_BODIES as i64;
const DT_RANGE: RangeInclusive<i64> = 1..=1000;
const DURATION_RANGE: RangeInclusive<i64> = 1..=1000;

/// Owns the active driver and the scenario new runs are built from.
pub struct Console<R, W> {
    input: R,
    output: W,
    driver: Driver,
    scenario: Scenario,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, scenario: Scenario) -> Self {
        Self {
            input,
            output,
            driver: Driver::new(),
            scenario,
        }
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `q` or end of input. The driver is stopped on the way out.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the solar planet simulator! Select from the menu.")?;
        loop {
            writeln!(self.output)?;
            write!(self.output, "(s)tart, (p)ause, (r)esume, (g)et status, (q)uit? ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let result = match Command::parse(&line) {
                Some(Command::Start) => self.start()?,
                Some(Command::Pause) => self.driver.pause().to_string(),
                Some(Command::Resume) => match self.driver.resume() {
                    Ok(transition) => transition.to_string(),
                    Err(err) => {
                        warn!("{err}");
                        err.to_string()
                    }
                },
                Some(Command::Status) => self.status(),
                Some(Command::Quit) => break,
                None => "Please choose from the menu".to_string(),
            };

            writeln!(self.output)?;
            writeln!(self.output, "{result}")?;
        }

        self.driver.stop();
        info!("console closed");
        Ok(())
    }

    fn start(&mut self) -> io::Result<String> {
        writeln!(self.output)?;
        let (bodies, dt, duration) = match self.read_run_settings()? {
            Ok(values) => values,
            Err(err) => return Ok(err.to_string()),
        };

        // ranges above keep these casts lossless
        let started = self
            .scenario
            .system(bodies as usize)
            .and_then(|system| {
                self.driver
                    .configure_and_start(system, duration as u32, dt as u32)
            });
        Ok(match started {
            Ok(()) => format!("A new simulation of {bodies} planets initiated."),
            Err(err) => {
                warn!("could not start simulation: {err}");
                err.to_string()
            }
        })
    }

    /// Body count, dt and duration, stopping at the first bad answer
    fn read_run_settings(&mut self) -> io::Result<Result<(i64, i64, i64), InputError>> {
        let bodies = match self.prompt_int(
            "How many planets (1 to 9) [In addition to the Sun]? ",
            BODY_RANGE,
        )? {
            Ok(v) => v,
            Err(e) => return Ok(Err(e)),
        };
        let dt = match self.prompt_int(
            "Simulation dt (ms) [1 to 1000]? (1 simulation dt (ms) = 1 day of actual time) ",
            DT_RANGE,
        )? {
            Ok(v) => v,
            Err(e) => return Ok(Err(e)),
        };
        let duration = match self.prompt_int(
            "Simulation duration (how many dt's) [1 to 1000]? ",
            DURATION_RANGE,
        )? {
            Ok(v) => v,
            Err(e) => return Ok(Err(e)),
        };
        Ok(Ok((bodies, dt, duration)))
    }

    fn status(&self) -> String {
        match self.driver.snapshot() {
            Some(snap) => format!(
                "At time: {} (of {} dt's, {})\n{}",
                snap.simulated_time, snap.configured_duration, snap.status, snap.state_text
            ),
            None => format!(
                "At time: {}\nNo simulation has been started",
                self.driver.simulated_time()
            ),
        }
    }

    fn prompt_int(
        &mut self,
        prompt: &str,
        range: RangeInclusive<i64>,
    ) -> io::Result<Result<i64, InputError>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(line) => parse_int(&line, range),
            None => Err(InputError::Eof),
        })
    }

    /// `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
