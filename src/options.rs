//! Construction options for the circle timer.
//!
//! Options are applied in order onto [`Settings`], which are then
//! validated when the timer is built. Later options override earlier ones.
//!
//! ```rust
//! use circle_timer::options::{with_additive_mode, with_limit_in_millis, with_start_time_in_millis};
//!
//! let timer = circle_timer::new(&[
//!     with_start_time_in_millis(90_000),
//!     with_limit_in_millis(120_000),
//!     with_additive_mode(false),
//! ])
//! .unwrap();
//!
//! assert_eq!(timer.duration(), 90_000);
//! assert_eq!(timer.angle().sweep_angle, 270.0);
//! ```

use std::time::Duration;

use crate::angle::DEFAULT_START_ANGLE;
use crate::circle::Styles;
use crate::driver::DEFAULT_INTERVAL;
use crate::error::{ConfigError, Result};
use crate::ladder::{BaseUnit, UnitLabels, UnitLadder};

/// Limit used when none is configured: one minute in milliseconds.
pub const DEFAULT_LIMIT_MILLIS: i64 = 60_000;

/// Amount the duration moves per tick when none is configured.
pub const DEFAULT_TICK_STEP: u64 = 100;

/// Number of segments in the text gauge.
pub const DEFAULT_GAUGE_WIDTH: usize = 12;

/// Everything a circle timer is built from.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Initial duration, in the ladder's base unit.
    pub start_time: i64,
    /// Duration that maps to one full revolution of the arc.
    pub limit: i64,
    /// Count up (`true`) or down (`false`).
    pub additive: bool,
    /// Direction the arc is drawn in.
    pub clockwise: bool,
    /// Where the arc starts, in degrees.
    pub start_angle: f64,
    /// Display units.
    pub ladder: UnitLadder,
    /// Raw duration unit picked by an option, kept when the ladder is
    /// replaced afterwards. `None` leaves each ladder's own base alone.
    pub base_unit: Option<BaseUnit>,
    /// Amount added or removed per tick, in the base unit.
    pub tick_step: u64,
    /// Time between ticks.
    pub tick_interval: Duration,
    /// Terminal styles used by `view`.
    pub styles: Styles,
    /// Segments in the text gauge drawn by `view`.
    pub gauge_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_time: 0,
            limit: DEFAULT_LIMIT_MILLIS,
            additive: false,
            clockwise: true,
            start_angle: DEFAULT_START_ANGLE,
            ladder: UnitLadder::standard(),
            base_unit: None,
            tick_step: DEFAULT_TICK_STEP,
            tick_interval: DEFAULT_INTERVAL,
            styles: Styles::default(),
            gauge_width: DEFAULT_GAUGE_WIDTH,
        }
    }
}

impl Settings {
    /// Applies `opts` in order on top of the defaults.
    pub fn from_options(opts: &[CircleTimerOption]) -> Self {
        let mut settings = Self::default();
        for opt in opts {
            opt.apply(&mut settings);
        }
        settings
    }

    /// Checks the settings describe a timer that can run.
    ///
    /// # Errors
    ///
    /// Returns an invalid-configuration error for a negative start time or
    /// limit, a zero limit in subtractive mode, or a zero tick step or
    /// interval.
    pub fn validate(&self) -> Result<()> {
        if self.start_time < 0 {
            return Err(ConfigError::NegativeDuration(self.start_time).into());
        }
        if self.limit < 0 {
            return Err(ConfigError::NegativeLimit(self.limit).into());
        }
        if self.limit == 0 && !self.additive {
            return Err(ConfigError::ZeroLimit.into());
        }
        if self.tick_step == 0 {
            return Err(ConfigError::ZeroTickStep.into());
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval.into());
        }
        Ok(())
    }
}

/// Configuration options for building a circle timer.
#[derive(Debug, Clone)]
pub enum CircleTimerOption {
    /// Initial duration in milliseconds.
    WithStartTimeInMillis(i64),
    /// Duration, in milliseconds, that fills the whole circle.
    WithLimitInMillis(i64),
    /// Switches to a seconds base and uses the value as both the initial
    /// duration and the limit.
    WithTotalTimeInSeconds(i64),
    /// Count up instead of down.
    WithAdditiveMode(bool),
    /// Arc direction.
    WithClockwise(bool),
    /// Arc start angle in degrees.
    WithStartAngle(f64),
    /// Relabels the current ladder by position.
    WithLabels(UnitLabels),
    /// Replaces the ladder. A base unit chosen by an earlier option is
    /// carried over to the new ladder.
    WithLadder(UnitLadder),
    /// Re-bases the ladder, and any ladder set after it. Also resets the
    /// tick to the base's default: 100 every 100 ms for milliseconds, 1
    /// every second for seconds.
    WithBaseUnit(BaseUnit),
    /// Amount the duration moves per tick, in the base unit.
    WithTickStep(u64),
    /// Time between ticks.
    WithTickInterval(Duration),
    /// Terminal styles.
    WithStyles(Box<Styles>),
    /// Segments in the text gauge.
    WithGaugeWidth(usize),
}

impl CircleTimerOption {
    fn apply(&self, s: &mut Settings) {
        match self {
            CircleTimerOption::WithStartTimeInMillis(ms) => s.start_time = *ms,
            CircleTimerOption::WithLimitInMillis(ms) => s.limit = *ms,
            CircleTimerOption::WithTotalTimeInSeconds(secs) => {
                CircleTimerOption::WithBaseUnit(BaseUnit::Seconds).apply(s);
                s.start_time = *secs;
                s.limit = *secs;
            }
            CircleTimerOption::WithAdditiveMode(additive) => s.additive = *additive,
            CircleTimerOption::WithClockwise(clockwise) => s.clockwise = *clockwise,
            CircleTimerOption::WithStartAngle(angle) => s.start_angle = *angle,
            CircleTimerOption::WithLabels(labels) => {
                s.ladder = s.ladder.clone().relabel(labels);
            }
            CircleTimerOption::WithLadder(ladder) => {
                s.ladder = match s.base_unit {
                    Some(base) => ladder.clone().with_base(base),
                    None => ladder.clone(),
                };
            }
            CircleTimerOption::WithBaseUnit(base) => {
                s.ladder = s.ladder.clone().with_base(*base);
                s.base_unit = Some(*base);
                (s.tick_step, s.tick_interval) = default_tick(*base);
            }
            CircleTimerOption::WithTickStep(step) => s.tick_step = *step,
            CircleTimerOption::WithTickInterval(interval) => s.tick_interval = *interval,
            CircleTimerOption::WithStyles(styles) => s.styles = styles.as_ref().clone(),
            CircleTimerOption::WithGaugeWidth(width) => s.gauge_width = *width,
        }
    }
}

// One tick moves a tenth of a second in millisecond mode and a whole
// second in seconds mode.
fn default_tick(base: BaseUnit) -> (u64, Duration) {
    match base {
        BaseUnit::Millis => (DEFAULT_TICK_STEP, DEFAULT_INTERVAL),
        BaseUnit::Seconds => (1, Duration::from_secs(1)),
    }
}

/// Initial duration in milliseconds.
pub fn with_start_time_in_millis(ms: i64) -> CircleTimerOption {
    CircleTimerOption::WithStartTimeInMillis(ms)
}

/// Duration in milliseconds that fills the whole circle.
pub fn with_limit_in_millis(ms: i64) -> CircleTimerOption {
    CircleTimerOption::WithLimitInMillis(ms)
}

/// Seconds base, counting from `secs` with `secs` as the limit.
pub fn with_total_time_in_seconds(secs: i64) -> CircleTimerOption {
    CircleTimerOption::WithTotalTimeInSeconds(secs)
}

/// Count up (`true`) or down (`false`).
pub fn with_additive_mode(additive: bool) -> CircleTimerOption {
    CircleTimerOption::WithAdditiveMode(additive)
}

/// Arc direction.
pub fn with_clockwise(clockwise: bool) -> CircleTimerOption {
    CircleTimerOption::WithClockwise(clockwise)
}

/// Arc start angle in degrees.
pub fn with_start_angle(angle: f64) -> CircleTimerOption {
    CircleTimerOption::WithStartAngle(angle)
}

/// Unit labels.
pub fn with_labels(labels: UnitLabels) -> CircleTimerOption {
    CircleTimerOption::WithLabels(labels)
}

/// Display ladder.
pub fn with_ladder(ladder: UnitLadder) -> CircleTimerOption {
    CircleTimerOption::WithLadder(ladder)
}

/// Raw duration unit.
pub fn with_base_unit(base: BaseUnit) -> CircleTimerOption {
    CircleTimerOption::WithBaseUnit(base)
}

/// Amount moved per tick.
pub fn with_tick_step(step: u64) -> CircleTimerOption {
    CircleTimerOption::WithTickStep(step)
}

/// Time between ticks.
pub fn with_tick_interval(interval: Duration) -> CircleTimerOption {
    CircleTimerOption::WithTickInterval(interval)
}

/// Terminal styles.
pub fn with_styles(styles: Styles) -> CircleTimerOption {
    CircleTimerOption::WithStyles(Box::new(styles))
}

/// Segments in the text gauge.
pub fn with_gauge_width(width: usize) -> CircleTimerOption {
    CircleTimerOption::WithGaugeWidth(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let s = Settings::from_options(&[]);
        assert_eq!(s.start_time, 0);
        assert_eq!(s.limit, 60_000);
        assert!(!s.additive);
        assert!(s.clockwise);
        assert_eq!(s.start_angle, -90.0);
        assert_eq!(s.tick_step, 100);
        assert_eq!(s.tick_interval, Duration::from_millis(100));
        assert_eq!(s.ladder, UnitLadder::standard());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_later_options_override() {
        let s = Settings::from_options(&[with_limit_in_millis(1_000), with_limit_in_millis(5_000)]);
        assert_eq!(s.limit, 5_000);
    }

    #[test]
    fn test_total_time_in_seconds() {
        let s = Settings::from_options(&[with_total_time_in_seconds(90)]);
        assert_eq!(s.start_time, 90);
        assert_eq!(s.limit, 90);
        assert_eq!(s.ladder.base_per_smallest(), 1);
        assert_eq!(s.tick_step, 1);
        assert_eq!(s.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_tick_step_after_base_unit_wins() {
        let s = Settings::from_options(&[with_base_unit(BaseUnit::Seconds), with_tick_step(5)]);
        assert_eq!(s.tick_step, 5);
    }

    #[test]
    fn test_labels_relabel_ladder() {
        let labels = UnitLabels {
            hours: "ORE".to_string(),
            ..UnitLabels::default()
        };
        let s = Settings::from_options(&[with_ladder(UnitLadder::with_weeks()), with_labels(labels)]);
        assert_eq!(s.ladder.len(), 5);
        assert_eq!(s.ladder.unit(2).unwrap().label, "ORE");
    }

    #[test]
    fn test_validate_rejects_zero_limit_when_subtractive() {
        let s = Settings::from_options(&[with_limit_in_millis(0)]);
        assert_eq!(s.validate(), Err(Error::InvalidConfiguration(ConfigError::ZeroLimit)));

        let s = Settings::from_options(&[with_limit_in_millis(0), with_additive_mode(true)]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let s = Settings::from_options(&[with_start_time_in_millis(-1)]);
        assert_eq!(
            s.validate(),
            Err(Error::InvalidConfiguration(ConfigError::NegativeDuration(-1)))
        );

        let s = Settings::from_options(&[with_limit_in_millis(-10)]);
        assert_eq!(
            s.validate(),
            Err(Error::InvalidConfiguration(ConfigError::NegativeLimit(-10)))
        );
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let s = Settings::from_options(&[with_tick_step(0)]);
        assert_eq!(s.validate(), Err(Error::InvalidConfiguration(ConfigError::ZeroTickStep)));

        let s = Settings::from_options(&[with_tick_interval(Duration::ZERO)]);
        assert_eq!(
            s.validate(),
            Err(Error::InvalidConfiguration(ConfigError::ZeroTickInterval))
        );
    }

    #[test]
    fn test_ladder_after_seconds_keeps_seconds_base() {
        let s = Settings::from_options(&[
            with_total_time_in_seconds(90),
            with_ladder(UnitLadder::with_weeks()),
        ]);
        assert_eq!(s.ladder.len(), 5);
        assert_eq!(s.ladder.base_per_smallest(), 1);
        assert_eq!(s.tick_step, 1);
        assert_eq!(s.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_ladder_without_base_option_keeps_its_own_base() {
        let minutes = UnitLadder::new(
            60,
            vec![crate::ladder::UnitSpec::new("M", 60), crate::ladder::UnitSpec::new("H", 24)],
        )
        .unwrap();
        let s = Settings::from_options(&[with_ladder(minutes)]);
        assert_eq!(s.ladder.base_per_smallest(), 60);
    }

    #[test]
    fn test_millis_base_restores_default_tick() {
        let s = Settings::from_options(&[
            with_total_time_in_seconds(90),
            with_base_unit(BaseUnit::Millis),
        ]);
        assert_eq!(s.ladder.base_per_smallest(), 1_000);
        assert_eq!(s.tick_step, DEFAULT_TICK_STEP);
        assert_eq!(s.tick_interval, DEFAULT_INTERVAL);
    }
}
