#![warn(missing_docs)]

//! # circle-timer
//!
//! A circular countdown / count-up timer component for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! The timer shows a duration as a pair of adjacent units (for example
//! `HR 1` over `MIN 2`) inside a circle, with a foreground arc sweeping
//! in proportion to the elapsed or remaining time. It follows the Elm
//! Architecture like any other bubbletea-rs model: ticks arrive as
//! messages, `update` applies them, and `view` renders the face.
//!
//! ## Features
//!
//! - **Countdown and count-up** modes, switchable while running
//! - **Configurable unit ladders**: seconds to days, optionally weeks, with
//!   custom labels and a millisecond or second base unit
//! - **Cancellable ticks**: stopping a timer invalidates every tick already
//!   in flight
//! - **Arc geometry** exposed as plain angles for callers that draw their
//!   own circle
//!
//! ## Modules
//!
//! - [`ladder`]: display units and how they convert into each other
//! - [`decompose`]: turns a duration into the two values on the face
//! - [`angle`]: sweep angle of the foreground arc
//! - [`driver`]: tick scheduling and the idle/running state machine
//! - [`circle`]: the component model and its terminal view
//! - [`options`]: construction options
//! - [`error`]: configuration errors
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_timer::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     timer: CircleTimer,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = circle_timer::new(&[
//!             with_start_time_in_millis(5 * 60 * 1000),
//!             with_limit_in_millis(5 * 60 * 1000),
//!         ])
//!         .unwrap();
//!         let cmd = timer.start();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<FinishedMsg>().is_some() {
//!             return Some(bubbletea_rs::quit());
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`]: starts and stops
//! at `info`, redundant start requests and rejected configuration at
//! `warn`, and every tick and decomposition at `debug`. Install any
//! subscriber to see them.

pub mod angle;
pub mod circle;
pub mod decompose;
pub mod driver;
pub mod error;
pub mod ladder;
pub mod options;

pub use angle::{compute_sweep_angle, AngleState};
pub use circle::{new, FinishedMsg, Model as CircleTimer, Styles};
pub use decompose::{Decomposer, DisplayPair};
pub use driver::{StartStopMsg, TickMsg, Transition};
pub use error::{ConfigError, Error, Result};
pub use ladder::{BaseUnit, UnitLabels, UnitLadder, UnitSpec};
pub use options::{CircleTimerOption, Settings};

/// Prelude module for convenient imports.
///
/// ```rust
/// use circle_timer::prelude::*;
///
/// let timer: CircleTimer = circle_timer::new(&[with_additive_mode(true)]).unwrap();
/// assert!(timer.is_additive());
/// ```
pub mod prelude {
    pub use crate::angle::AngleState;
    pub use crate::circle::{FinishedMsg, Model as CircleTimer, Styles};
    pub use crate::decompose::DisplayPair;
    pub use crate::driver::{StartStopMsg, TickMsg, Transition};
    pub use crate::error::{ConfigError, Error};
    pub use crate::ladder::{BaseUnit, UnitLabels, UnitLadder};
    pub use crate::options::{
        with_additive_mode, with_base_unit, with_clockwise, with_gauge_width, with_labels,
        with_ladder, with_limit_in_millis, with_start_angle, with_start_time_in_millis,
        with_styles, with_tick_interval, with_tick_step, with_total_time_in_seconds,
        CircleTimerOption,
    };
}
