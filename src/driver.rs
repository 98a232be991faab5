//! Tick scheduling for the circle timer.
//!
//! The driver is a two-state machine, **Idle** and **Running**. While
//! running it hands out tick commands; each command fires once after the
//! tick interval and delivers a [`TickMsg`] back into the program's update
//! loop, so every state change happens on the same thread as rendering.
//!
//! # Cancellation
//!
//! Every tick carries the driver's id and the tag of the run that issued
//! it. Both `start` and `stop` bump the tag, so a tick that was already in
//! flight when the timer was stopped (or stopped and restarted) is
//! rejected when it arrives. Once `stop` returns, no tick from an earlier
//! run can be accepted.
//!
//! # Single Flight
//!
//! An accepted tick schedules exactly one successor, and only after the
//! owner has applied its state change. There is never more than one live
//! tick per run.
//!
//! ```rust
//! use circle_timer::driver::{Driver, Transition};
//! use std::time::Duration;
//!
//! let mut driver = Driver::new(Duration::from_millis(100));
//! assert!(!driver.running());
//!
//! assert_eq!(driver.start(), Transition::Started);
//! assert_eq!(driver.start(), Transition::AlreadyRunning);
//!
//! let stale = driver.tick_msg();
//! assert_eq!(driver.stop(), Transition::Stopped);
//! assert!(!driver.accepts(&stale));
//! assert_eq!(driver.stop(), Transition::NotRunning);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

// Internal ID management for driver instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Outcome of a start or stop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle → Running.
    Started,
    /// Start requested while running; nothing changed.
    AlreadyRunning,
    /// Running → Idle.
    Stopped,
    /// Stop requested while idle; nothing changed.
    NotRunning,
}

/// Message delivered once per tick interval while the timer runs.
///
/// Ticks are only produced by the driver. A tick is accepted when its id
/// matches the driver and its tag matches the current run.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the driver that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Message asking a timer to start or stop, for programs that drive the
/// timer through their update loop.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// Identifier of the driver this message targets.
    pub id: i64,
    running: bool,
}

impl StartStopMsg {
    /// Whether the target should be running after this message.
    pub fn running(&self) -> bool {
        self.running
    }
}

/// Idle/Running state machine that issues tagged tick commands.
#[derive(Debug, Clone)]
pub struct Driver {
    interval: Duration,
    id: i64,
    tag: i64,
    running: bool,
}

impl Driver {
    /// Creates an idle driver ticking every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            running: false,
        }
    }

    /// Unique identifier of this driver.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the driver is in the Running state.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the tick period. Takes effect from the next scheduled tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Idle → Running. Starting a running driver is a no-op.
    pub fn start(&mut self) -> Transition {
        if self.running {
            warn!(id = self.id, "start requested while already running");
            return Transition::AlreadyRunning;
        }
        self.tag += 1;
        self.running = true;
        info!(id = self.id, interval_ms = self.interval.as_millis() as u64, "timer started");
        Transition::Started
    }

    /// Running → Idle. Invalidates every tick issued so far, so it is safe
    /// to call at any time and any number of times.
    pub fn stop(&mut self) -> Transition {
        self.tag += 1;
        if !self.running {
            debug!(id = self.id, "stop requested while idle");
            return Transition::NotRunning;
        }
        self.running = false;
        info!(id = self.id, "timer stopped");
        Transition::Stopped
    }

    /// Whether `msg` belongs to the current run of this driver.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.running && msg.id == self.id && msg.tag == self.tag
    }

    /// The tick message the current run expects next.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next tick of the current run.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Message form of a start/stop request addressed to this driver.
    pub fn start_stop_msg(&self, running: bool) -> StartStopMsg {
        StartStopMsg {
            id: self.id,
            running,
        }
    }

    /// Command delivering a start/stop request to this driver.
    pub fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
