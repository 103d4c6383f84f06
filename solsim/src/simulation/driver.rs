//! Simulation clock
//!
//! The [`Driver`] owns the current [`System`] behind a single mutex and a
//! [`Timer`] that fires every `dt_millis` of wall time. Each fire is one tick:
//! the system advances one step and simulated time grows by `dt_millis`.
//! Ticks, pause, resume and reconfiguration all take the same lock, so a tick
//! is either fully applied or not at all.
//!
//! ```text
//! Stopped --configure_and_start--> Running <--pause/resume--> Paused
//! Running --duration reached--> Stopped
//! ```
//!
//! Simulated time is kept as an integer tick count; `simulated_time()` is
//! `ticks * dt_millis`, so the end of a run lands exactly on `duration * dt`.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};

use crate::error::SimError;
use crate::simulation::states::System;
use crate::simulation::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Stopped,
    Running,
    Paused,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::Stopped => "stopped",
            Status::Running => "running",
            Status::Paused => "paused",
        };
        f.write_str(msg)
    }
}

/// Everything a status report shows, read under one lock so the time and
/// the positions belong to the same tick
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub status: Status,
    pub ticks_fired: u32,
    pub simulated_time: f64,
    pub configured_duration: f64,
    /// physical seconds integrated by the bound system
    pub system_time: f64,
    pub state_text: String,
}

/// What a pause or resume request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Paused,
    Resumed,
    /// pause while already paused
    AlreadyPaused,
    /// pause with no run in progress
    NotRunning,
    /// resume while running or stopped
    NothingToResume,
}

impl Transition {
    /// `false` for the no-op outcomes
    pub fn applied(self) -> bool {
        matches!(self, Transition::Paused | Transition::Resumed)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Transition::Paused => "Simulation paused.",
            Transition::Resumed => "Simulation resumed.",
            Transition::AlreadyPaused => "Simulation is already paused",
            Transition::NotRunning => "No Simulation is running to be paused",
            Transition::NothingToResume => "No Simulation is paused to be resumed",
        };
        f.write_str(msg)
    }
}

/// State shared between the control thread and the timer thread
#[derive(Debug)]
struct Clock {
    system: Option<System>,
    status: Status,
    ticks_fired: u32,
    duration_ticks: u32,
    dt_millis: u32,
    // bumped on every (re)start or pause; a timer whose generation is stale
    // never ticks again
    generation: u64,
}

impl Clock {
    fn simulated_time(&self) -> f64 {
        f64::from(self.ticks_fired) * f64::from(self.dt_millis)
    }

    fn finish(&mut self) {
        self.status = Status::Stopped;
        info!(
            "simulation finished after {} ticks (t = {})",
            self.ticks_fired,
            self.simulated_time()
        );
    }

    /// One timer fire. Returns whether the timer should keep firing.
    fn on_tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != Status::Running {
            return false;
        }
        if self.ticks_fired >= self.duration_ticks {
            self.finish();
            return false;
        }

        if let Some(system) = self.system.as_mut() {
            system.tick();
        }
        self.ticks_fired += 1;
        debug!("tick {}/{}", self.ticks_fired, self.duration_ticks);

        if self.ticks_fired >= self.duration_ticks {
            self.finish();
            return false;
        }
        true
    }
}

pub struct Driver {
    clock: Arc<Mutex<Clock>>,
    timer: Option<Timer>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(Clock {
                system: None,
                status: Status::Stopped,
                ticks_fired: 0,
                duration_ticks: 0,
                dt_millis: 0,
                generation: 0,
            })),
            timer: None,
        }
    }

    // A panicking tick leaves the clock usable; the next start replaces it.
    fn lock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current run with `system` and start ticking every
    /// `dt_millis` until `duration_ticks` ticks have fired.
    pub fn configure_and_start(
        &mut self,
        system: System,
        duration_ticks: u32,
        dt_millis: u32,
    ) -> Result<(), SimError> {
        if dt_millis == 0 {
            return Err(SimError::InvalidParameter {
                name: "dt_millis",
                value: 0.0,
            });
        }

        let orbiting = system.orbiting_count();
        let generation = {
            let mut clock = self.lock();
            clock.generation += 1;
            clock.system = Some(system);
            clock.ticks_fired = 0;
            clock.duration_ticks = duration_ticks;
            clock.dt_millis = dt_millis;
            clock.status = Status::Running;
            clock.generation
        };
        self.stop_timer();

        info!("starting {orbiting} orbiting bodies for {duration_ticks} ticks of {dt_millis} ms");
        self.start_timer(generation, dt_millis)
    }

    /// Suspend ticking, keeping simulated time and body state.
    pub fn pause(&mut self) -> Transition {
        {
            let mut clock = self.lock();
            match clock.status {
                Status::Running => {
                    clock.status = Status::Paused;
                    clock.generation += 1;
                }
                Status::Paused => return Transition::AlreadyPaused,
                Status::Stopped => return Transition::NotRunning,
            }
        }
        self.stop_timer();
        info!("simulation paused at t = {}", self.simulated_time());
        Transition::Paused
    }

    /// Restart ticking on the same cadence after a pause.
    pub fn resume(&mut self) -> Result<Transition, SimError> {
        let (generation, dt_millis) = {
            let mut clock = self.lock();
            if clock.status != Status::Paused {
                return Ok(Transition::NothingToResume);
            }
            clock.status = Status::Running;
            clock.generation += 1;
            (clock.generation, clock.dt_millis)
        };
        self.start_timer(generation, dt_millis)?;
        info!("simulation resumed at t = {}", self.simulated_time());
        Ok(Transition::Resumed)
    }

    /// Halt the current run for good; used on exit.
    pub fn stop(&mut self) {
        {
            let mut clock = self.lock();
            if clock.status != Status::Stopped {
                info!("simulation stopped at t = {}", clock.simulated_time());
            }
            clock.status = Status::Stopped;
            clock.generation += 1;
        }
        self.stop_timer();
    }

    pub fn status(&self) -> Status {
        self.lock().status
    }

    /// Ticks fired times `dt_millis`
    pub fn simulated_time(&self) -> f64 {
        self.lock().simulated_time()
    }

    /// Configured run length in ticks
    pub fn configured_duration(&self) -> f64 {
        f64::from(self.lock().duration_ticks)
    }

    pub fn ticks_fired(&self) -> u32 {
        self.lock().ticks_fired
    }

    /// Position report of the bound system, if any
    pub fn state_text(&self) -> Option<String> {
        self.lock().system.as_ref().map(System::current_state_text)
    }

    /// Consistent view of the bound run; `None` before the first start
    pub fn snapshot(&self) -> Option<Snapshot> {
        let clock = self.lock();
        let system = clock.system.as_ref()?;
        Some(Snapshot {
            status: clock.status,
            ticks_fired: clock.ticks_fired,
            simulated_time: clock.simulated_time(),
            configured_duration: f64::from(clock.duration_ticks),
            system_time: system.t,
            state_text: system.current_state_text(),
        })
    }

    /// Run `f` against the bound system under the lock
    pub fn with_system<R>(&self, f: impl FnOnce(&System) -> R) -> Option<R> {
        self.lock().system.as_ref().map(f)
    }

    fn start_timer(&mut self, generation: u64, dt_millis: u32) -> Result<(), SimError> {
        let clock = Arc::clone(&self.clock);
        let started = Timer::start(Duration::from_millis(u64::from(dt_millis)), move || {
            clock
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .on_tick(generation)
        });

        match started {
            Ok(timer) => {
                self.timer = Some(timer);
                Ok(())
            }
            Err(err) => {
                let mut clock = self.lock();
                if clock.generation == generation {
                    clock.status = Status::Stopped;
                }
                Err(SimError::Timer(err))
            }
        }
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.stop();
    }
}
