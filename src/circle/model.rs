//! The circle timer model: state, setters and message handling.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::view::Styles;
use crate::angle::{compute_sweep_angle, AngleState};
use crate::decompose::{Decomposer, DisplayPair};
use crate::driver::{Driver, StartStopMsg, TickMsg, Transition};
use crate::error::{ConfigError, Result};
use crate::ladder::UnitLadder;
use crate::options::{CircleTimerOption, Settings};

/// Sent once when a countdown reaches zero and stops itself.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// Identifier of the timer that finished.
    pub id: i64,
}

/// Circular countdown / count-up timer.
///
/// The model owns the current duration and everything derived from it:
/// the two label/value pairs on the face and the arc angle. Every change,
/// whether from a setter or a tick, recomputes both before returning.
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) ladder: UnitLadder,
    pub(super) decomposer: Decomposer,
    pub(super) angle: AngleState,
    pub(super) driver: Driver,
    current: u64,
    pub(super) limit: u64,
    additive: bool,
    tick_step: u64,
    needs_redraw: bool,
    /// Terminal styles used by [`Model::view`].
    pub styles: Styles,
    /// Segments in the text gauge drawn by [`Model::view`].
    pub gauge_width: usize,
}

/// Builds a timer from options.
///
/// # Errors
///
/// Returns an invalid-configuration error when the resulting settings are
/// invalid (see [`Settings::validate`]).
pub fn new(opts: &[CircleTimerOption]) -> Result<Model> {
    Model::from_settings(Settings::from_options(opts))
}

impl Model {
    /// Builds a timer from already assembled settings.
    ///
    /// # Errors
    ///
    /// Returns an invalid-configuration error when `settings` are invalid.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let mut model = Self {
            decomposer: Decomposer::new(&settings.ladder),
            ladder: settings.ladder,
            angle: AngleState::new(settings.start_angle, settings.clockwise),
            driver: Driver::new(settings.tick_interval),
            current: 0,
            limit: 0,
            additive: settings.additive,
            tick_step: settings.tick_step,
            needs_redraw: false,
            styles: settings.styles,
            gauge_width: settings.gauge_width,
        };
        model.apply(
            settings.start_time as u64,
            settings.limit as u64,
            settings.additive,
        )?;
        Ok(model)
    }

    /// Identifier carried by this timer's messages.
    pub fn id(&self) -> i64 {
        self.driver.id()
    }

    /// Current duration, in the ladder's base unit.
    pub fn duration(&self) -> u64 {
        self.current
    }

    /// Duration that maps to one full revolution.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether the timer counts up.
    pub fn is_additive(&self) -> bool {
        self.additive
    }

    /// Whether the timer is ticking.
    pub fn is_running(&self) -> bool {
        self.driver.running()
    }

    /// Amount the duration moves per tick.
    pub fn tick_step(&self) -> u64 {
        self.tick_step
    }

    /// Time between ticks.
    pub fn tick_interval(&self) -> Duration {
        self.driver.interval()
    }

    /// The display units.
    pub fn ladder(&self) -> &UnitLadder {
        &self.ladder
    }

    /// The two label/value pairs on the face.
    pub fn display(&self) -> &DisplayPair {
        self.decomposer.display()
    }

    /// The foreground arc.
    pub fn angle(&self) -> &AngleState {
        &self.angle
    }

    /// Returns whether anything changed since the last call, and clears
    /// the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Sets the current duration.
    ///
    /// # Errors
    ///
    /// Rejects negative values; the timer keeps its previous duration.
    pub fn set_duration(&mut self, value: i64) -> Result<()> {
        if value < 0 {
            warn!(value, "rejected negative duration");
            return Err(ConfigError::NegativeDuration(value).into());
        }
        self.apply(value as u64, self.limit, self.additive)
    }

    /// Sets the duration that fills the whole circle.
    ///
    /// # Errors
    ///
    /// Rejects negative values, and zero while counting down.
    pub fn set_limit(&mut self, value: i64) -> Result<()> {
        if value < 0 {
            warn!(value, "rejected negative limit");
            return Err(ConfigError::NegativeLimit(value).into());
        }
        self.apply(self.current, value as u64, self.additive)
    }

    /// Switches between counting up and counting down. Takes effect from
    /// the next tick if the timer is running.
    ///
    /// # Errors
    ///
    /// Switching to counting down is rejected while the limit is zero.
    pub fn set_additive_mode(&mut self, additive: bool) -> Result<()> {
        self.apply(self.current, self.limit, additive)?;
        debug!(additive, "mode changed");
        Ok(())
    }

    /// Sets the arc direction.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.angle.clockwise = clockwise;
        self.needs_redraw = true;
    }

    /// Sets the amount the duration moves per tick.
    ///
    /// # Errors
    ///
    /// Rejects zero.
    pub fn set_tick_step(&mut self, step: u64) -> Result<()> {
        if step == 0 {
            return Err(ConfigError::ZeroTickStep.into());
        }
        self.tick_step = step;
        Ok(())
    }

    /// Sets the time between ticks, effective from the next tick.
    ///
    /// # Errors
    ///
    /// Rejects a zero interval.
    pub fn set_tick_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval.into());
        }
        self.driver.set_interval(interval);
        Ok(())
    }

    /// Replaces the display units. The face starts over as if no non-zero
    /// duration had been shown, then shows the current duration.
    pub fn set_ladder(&mut self, ladder: UnitLadder) {
        self.decomposer.reset(&ladder);
        self.ladder = ladder;
        self.decomposer.decompose(self.current, &self.ladder);
        self.needs_redraw = true;
    }

    /// Starts ticking. Returns the first tick command, or `None` when the
    /// timer was already running.
    pub fn start(&mut self) -> Option<Cmd> {
        match self.driver.start() {
            Transition::Started => Some(self.driver.tick()),
            _ => None,
        }
    }

    /// Stops ticking. Safe to call repeatedly; no tick scheduled before
    /// this call will be applied.
    pub fn stop(&mut self) -> Transition {
        self.driver.stop()
    }

    /// Command that starts the timer through the update loop.
    pub fn start_cmd(&self) -> Cmd {
        self.driver.start_stop(true)
    }

    /// Command that stops the timer through the update loop.
    pub fn stop_cmd(&self) -> Cmd {
        self.driver.start_stop(false)
    }

    /// Command that flips the running state through the update loop.
    pub fn toggle_cmd(&self) -> Cmd {
        self.driver.start_stop(!self.driver.running())
    }

    /// Handles this timer's start/stop and tick messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != self.id() {
                return None;
            }
            if start_stop.running() {
                return self.start();
            }
            self.stop();
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.driver.accepts(tick) {
                return None;
            }
            return self.on_tick();
        }

        None
    }

    fn on_tick(&mut self) -> Option<Cmd> {
        let next = if self.additive {
            self.current.saturating_add(self.tick_step)
        } else if self.current == 0 {
            info!(id = self.id(), "countdown reached zero");
            self.driver.stop();
            return Some(self.finished());
        } else {
            self.current.saturating_sub(self.tick_step)
        };

        debug!(id = self.id(), from = self.current, to = next, "tick");

        // Unreachable through the setters, which keep the limit valid.
        if let Err(e) = self.apply(next, self.limit, self.additive) {
            error!(id = self.id(), error = %e, "tick failed, stopping timer");
            self.driver.stop();
            return None;
        }

        Some(self.driver.tick())
    }

    fn finished(&self) -> Cmd {
        let id = self.id();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FinishedMsg { id }) as Msg
        })
    }

    // Commits a new duration/limit/mode only if the arc can be computed
    // for it, then refreshes the face.
    fn apply(&mut self, current: u64, limit: u64, additive: bool) -> Result<()> {
        let sweep = compute_sweep_angle(current, limit, additive).inspect_err(|e| {
            warn!(current, limit, additive, error = %e, "configuration rejected");
        })?;

        self.current = current;
        self.limit = limit;
        self.additive = additive;
        self.decomposer.decompose(current, &self.ladder);
        self.angle.sweep_angle = sweep;
        self.needs_redraw = true;
        Ok(())
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        let settings = Settings::default();
        // Defaults start at zero, so the arc is empty and the face shows
        // its initial pair.
        Self {
            decomposer: Decomposer::new(&settings.ladder),
            ladder: settings.ladder,
            angle: AngleState::new(settings.start_angle, settings.clockwise),
            driver: Driver::new(settings.tick_interval),
            current: 0,
            limit: settings.limit as u64,
            additive: settings.additive,
            tick_step: settings.tick_step,
            needs_redraw: true,
            styles: settings.styles,
            gauge_width: settings.gauge_width,
        }
    }
}
