//! Arc geometry of the foreground circle.
//!
//! The foreground arc starts at a fixed angle (the top of the circle by
//! default) and sweeps an angle proportional to `current / limit`:
//!
//! - **Subtractive** (countdown): the sweep is bounded to `[0, 360]` and a
//!   zero limit is a configuration error.
//! - **Additive** (count-up): the sweep accumulates without bound, so a
//!   timer that runs past its limit keeps growing past one revolution.
//!   [`AngleState::wrapped_sweep`] folds the value back for drawing while
//!   [`AngleState::sweep_angle`] keeps the raw value.
//!
//! ```rust
//! use circle_timer::angle::compute_sweep_angle;
//!
//! assert_eq!(compute_sweep_angle(50, 100, false).unwrap(), 180.0);
//! assert_eq!(compute_sweep_angle(150, 100, true).unwrap(), 540.0);
//! assert!(compute_sweep_angle(100, 0, false).is_err());
//! ```

use crate::error::{ConfigError, Result};

/// Angle of the top of the circle, 0° being at 3 o'clock.
pub const DEFAULT_START_ANGLE: f64 = -90.0;

/// One full revolution, in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// Sweep angle, in degrees, for `current` out of `limit`.
///
/// In additive mode a zero limit gives the arc no scale to grow against
/// and the sweep stays at 0.
///
/// # Errors
///
/// Returns an invalid-configuration error when `limit` is zero in
/// subtractive mode.
pub fn compute_sweep_angle(current: u64, limit: u64, additive: bool) -> Result<f64> {
    if limit == 0 {
        if additive {
            return Ok(0.0);
        }
        return Err(ConfigError::ZeroLimit.into());
    }

    let sweep = FULL_CIRCLE * current as f64 / limit as f64;
    if additive {
        Ok(sweep)
    } else {
        Ok(sweep.clamp(0.0, FULL_CIRCLE))
    }
}

/// Arc state read by the renderer on every redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleState {
    /// Raw sweep in degrees; may exceed 360 in additive mode.
    pub sweep_angle: f64,
    /// Where the arc starts, in degrees.
    pub start_angle: f64,
    /// Direction the arc is drawn in.
    pub clockwise: bool,
}

impl AngleState {
    /// An arc with no sweep starting at `start_angle`.
    pub fn new(start_angle: f64, clockwise: bool) -> Self {
        Self {
            sweep_angle: 0.0,
            start_angle,
            clockwise,
        }
    }

    /// Sweep folded into one revolution. A full circle stays a full
    /// circle; anything beyond restarts from zero.
    pub fn wrapped_sweep(&self) -> f64 {
        if self.sweep_angle <= FULL_CIRCLE {
            self.sweep_angle
        } else {
            self.sweep_angle % FULL_CIRCLE
        }
    }

    /// Wrapped sweep with the sign a canvas expects: negative when drawing
    /// counter-clockwise.
    pub fn signed_sweep(&self) -> f64 {
        if self.clockwise {
            self.wrapped_sweep()
        } else {
            -self.wrapped_sweep()
        }
    }

    /// Fraction of the circle covered, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.wrapped_sweep() / FULL_CIRCLE
    }
}

impl Default for AngleState {
    fn default() -> Self {
        Self::new(DEFAULT_START_ANGLE, true)
    }
}
