//! Circle timer component for bubbletea-rs applications.
//!
//! Brings the unit ladder, the decomposer, the arc model and the tick
//! driver together behind one model with the usual `update` / `view`
//! pair.
//!
//! # Basic Usage
//!
//! ```rust
//! use circle_timer::circle::new;
//! use circle_timer::options::{with_limit_in_millis, with_start_time_in_millis};
//!
//! let mut timer = new(&[
//!     with_start_time_in_millis(330_000),
//!     with_limit_in_millis(600_000),
//! ])
//! .unwrap();
//!
//! assert_eq!(timer.display().top_label, "MIN");
//! assert_eq!(timer.display().top_value, "5");
//! assert_eq!(timer.display().bottom_value, "30");
//!
//! let first_tick = timer.start();
//! assert!(first_tick.is_some());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use circle_timer::circle::{FinishedMsg, Model as CircleTimer};
//! use circle_timer::options::with_start_time_in_millis;
//!
//! struct App {
//!     timer: CircleTimer,
//!     done: bool,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = circle_timer::new(&[with_start_time_in_millis(10_000)]).unwrap();
//!         let cmd = timer.start();
//!         (Self { timer, done: false }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
//!             if finished.id == self.timer.id() {
//!                 self.done = true;
//!                 return None;
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```

pub mod model;
pub mod view;


pub use model::{new, FinishedMsg, Model};
pub use view::Styles;
