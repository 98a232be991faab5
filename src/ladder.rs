//! Unit ladders used to break a raw duration into display units.
//!
//! A ladder is an ordered list of [`UnitSpec`]s, smallest unit first. Each
//! unit knows how many of itself make up the next larger unit (its
//! divisor), and the ladder knows how many raw base units (milliseconds or
//! seconds) make up its smallest unit.
//!
//! # Basic Usage
//!
//! ```rust
//! use circle_timer::ladder::{BaseUnit, UnitLadder, UnitSpec};
//!
//! // SEC, MIN, HR, DAY over milliseconds
//! let ladder = UnitLadder::standard();
//! assert_eq!(ladder.len(), 4);
//! assert_eq!(ladder.unit(1).unwrap().label, "MIN");
//!
//! // A custom ladder over seconds
//! let ladder = UnitLadder::new(
//!     BaseUnit::Seconds.per_second(),
//!     vec![UnitSpec::new("S", 60), UnitSpec::new("M", 60), UnitSpec::new("H", 24)],
//! )
//! .unwrap();
//! assert_eq!(ladder.absolute_counts(3725), vec![3725, 62, 1]);
//! ```

use crate::error::{ConfigError, Result};

/// Unit in which raw durations are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseUnit {
    /// Raw durations are milliseconds.
    #[default]
    Millis,
    /// Raw durations are whole seconds.
    Seconds,
}

impl BaseUnit {
    /// Number of base units in one second.
    pub fn per_second(self) -> u64 {
        match self {
            BaseUnit::Millis => 1_000,
            BaseUnit::Seconds => 1,
        }
    }
}

/// One rung of a unit ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    /// Position in the ladder, 0 being the smallest unit. Assigned by
    /// [`UnitLadder::new`].
    pub index: usize,
    /// Label shown next to the unit's value, e.g. `"MIN"`.
    pub label: String,
    /// How many of this unit make up the next larger unit. Not used for
    /// the largest unit of a ladder, which is never wrapped.
    pub divisor: u64,
}

impl UnitSpec {
    /// Creates a unit; its index is set when it is placed in a ladder.
    pub fn new(label: impl Into<String>, divisor: u64) -> Self {
        Self {
            index: 0,
            label: label.into(),
            divisor,
        }
    }
}

/// Labels for the preset ladders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLabels {
    /// Label for seconds.
    pub seconds: String,
    /// Label for minutes.
    pub minutes: String,
    /// Label for hours.
    pub hours: String,
    /// Label for days.
    pub days: String,
    /// Label for weeks, only used by [`UnitLadder::with_weeks_labeled`].
    pub weeks: String,
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            seconds: "SEC".to_string(),
            minutes: "MIN".to_string(),
            hours: "HR".to_string(),
            days: "DAY".to_string(),
            weeks: "WK".to_string(),
        }
    }
}

/// An ordered, validated list of display units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLadder {
    units: Vec<UnitSpec>,
    base_per_smallest: u64,
}

impl UnitLadder {
    /// Builds a ladder from units ordered smallest first.
    ///
    /// `base_per_smallest` is the number of raw base units in the smallest
    /// unit, e.g. 1000 when durations are milliseconds and the smallest
    /// unit is a second.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-configuration error when fewer than two units
    /// are given or when any divisor is zero.
    pub fn new(base_per_smallest: u64, units: Vec<UnitSpec>) -> Result<Self> {
        if units.len() < 2 {
            return Err(ConfigError::LadderTooShort(units.len()).into());
        }
        if base_per_smallest == 0 {
            return Err(ConfigError::ZeroBaseDivisor.into());
        }
        if let Some(unit) = units.iter().find(|u| u.divisor == 0) {
            return Err(ConfigError::ZeroDivisor(unit.label.clone()).into());
        }

        let units = units
            .into_iter()
            .enumerate()
            .map(|(index, unit)| UnitSpec { index, ..unit })
            .collect();

        Ok(Self {
            units,
            base_per_smallest,
        })
    }

    /// SEC(÷60), MIN(÷60), HR(÷24), DAY over milliseconds.
    pub fn standard() -> Self {
        Self::standard_labeled(&UnitLabels::default())
    }

    /// The standard four-unit ladder with custom labels.
    pub fn standard_labeled(labels: &UnitLabels) -> Self {
        Self::preset(vec![
            UnitSpec::new(labels.seconds.clone(), 60),
            UnitSpec::new(labels.minutes.clone(), 60),
            UnitSpec::new(labels.hours.clone(), 24),
            UnitSpec::new(labels.days.clone(), 7),
        ])
    }

    /// SEC, MIN, HR, DAY(÷7), WK over milliseconds.
    pub fn with_weeks() -> Self {
        Self::with_weeks_labeled(&UnitLabels::default())
    }

    /// The five-unit ladder with custom labels.
    pub fn with_weeks_labeled(labels: &UnitLabels) -> Self {
        Self::preset(vec![
            UnitSpec::new(labels.seconds.clone(), 60),
            UnitSpec::new(labels.minutes.clone(), 60),
            UnitSpec::new(labels.hours.clone(), 24),
            UnitSpec::new(labels.days.clone(), 7),
            UnitSpec::new(labels.weeks.clone(), 52),
        ])
    }

    // Presets are valid by construction; assign indices directly.
    fn preset(units: Vec<UnitSpec>) -> Self {
        let units = units
            .into_iter()
            .enumerate()
            .map(|(index, unit)| UnitSpec { index, ..unit })
            .collect();
        Self {
            units,
            base_per_smallest: BaseUnit::Millis.per_second(),
        }
    }

    /// Re-bases a seconds-smallest ladder onto a different raw unit.
    pub fn with_base(mut self, base: BaseUnit) -> Self {
        self.base_per_smallest = base.per_second();
        self
    }

    /// Replaces labels by position, assuming the ladder starts at seconds:
    /// index 0 takes `labels.seconds`, 1 minutes, 2 hours, 3 days and 4
    /// weeks. Units past the fifth keep their labels.
    pub fn relabel(mut self, labels: &UnitLabels) -> Self {
        let names = [
            &labels.seconds,
            &labels.minutes,
            &labels.hours,
            &labels.days,
            &labels.weeks,
        ];
        for (unit, name) in self.units.iter_mut().zip(names) {
            unit.label = name.clone();
        }
        self
    }

    /// Number of units in the ladder.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false: a valid ladder has at least two units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit at `index`, smallest first.
    pub fn unit(&self, index: usize) -> Option<&UnitSpec> {
        self.units.get(index)
    }

    /// All units, smallest first.
    pub fn units(&self) -> &[UnitSpec] {
        &self.units
    }

    /// The smallest unit.
    pub fn smallest(&self) -> &UnitSpec {
        &self.units[0]
    }

    /// The largest unit.
    pub fn largest(&self) -> &UnitSpec {
        &self.units[self.units.len() - 1]
    }

    /// Raw base units in one smallest unit.
    pub fn base_per_smallest(&self) -> u64 {
        self.base_per_smallest
    }

    /// Raw base units in one unit at `index`, or `None` on overflow or
    /// when the index is out of range.
    pub fn base_per_unit(&self, index: usize) -> Option<u64> {
        if index >= self.units.len() {
            return None;
        }
        self.units[..index]
            .iter()
            .try_fold(self.base_per_smallest, |acc, u| acc.checked_mul(u.divisor))
    }

    /// Whole-number count of each unit contained in `duration`, without
    /// wrapping: `counts[i] = duration / base_per_unit(i)`.
    pub fn absolute_counts(&self, duration: u64) -> Vec<u64> {
        let mut remaining = duration / self.base_per_smallest;
        let mut counts = Vec::with_capacity(self.units.len());
        for unit in &self.units {
            counts.push(remaining);
            remaining /= unit.divisor;
        }
        counts
    }
}

impl Default for UnitLadder {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_standard_ladder() {
        let ladder = UnitLadder::standard();
        let labels: Vec<&str> = ladder.units().iter().map(|u| u.label.as_str()).collect();
        assert_eq!(labels, vec!["SEC", "MIN", "HR", "DAY"]);
        assert_eq!(ladder.base_per_smallest(), 1000);
        for (i, unit) in ladder.units().iter().enumerate() {
            assert_eq!(unit.index, i);
        }
    }

    #[test]
    fn test_with_weeks_ladder() {
        let ladder = UnitLadder::with_weeks();
        assert_eq!(ladder.len(), 5);
        assert_eq!(ladder.largest().label, "WK");
        assert_eq!(ladder.unit(3).map(|u| u.divisor), Some(7));
    }

    #[test]
    fn test_custom_labels() {
        let labels = UnitLabels {
            minutes: "MINUTI".to_string(),
            seconds: "SECONDI".to_string(),
            ..UnitLabels::default()
        };
        let ladder = UnitLadder::standard_labeled(&labels);
        assert_eq!(ladder.smallest().label, "SECONDI");
        assert_eq!(ladder.unit(1).unwrap().label, "MINUTI");
        assert_eq!(ladder.largest().label, "DAY");
    }

    #[test]
    fn test_relabel_keeps_divisors() {
        let labels = UnitLabels {
            weeks: "SETT".to_string(),
            days: "GIORNI".to_string(),
            ..UnitLabels::default()
        };
        let ladder = UnitLadder::with_weeks().relabel(&labels);
        assert_eq!(ladder.largest().label, "SETT");
        assert_eq!(ladder.unit(3).unwrap().label, "GIORNI");
        assert_eq!(ladder.unit(3).unwrap().divisor, 7);
        assert_eq!(ladder.base_per_smallest(), 1000);
    }

    #[test]
    fn test_new_rejects_short_ladder() {
        let err = UnitLadder::new(1000, vec![UnitSpec::new("SEC", 60)]).unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration(ConfigError::LadderTooShort(1)));
    }

    #[test]
    fn test_new_rejects_zero_divisor() {
        let err = UnitLadder::new(
            1000,
            vec![UnitSpec::new("SEC", 60), UnitSpec::new("MIN", 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfiguration(ConfigError::ZeroDivisor("MIN".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_zero_base() {
        let err = UnitLadder::new(0, vec![UnitSpec::new("SEC", 60), UnitSpec::new("MIN", 60)])
            .unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration(ConfigError::ZeroBaseDivisor));
    }

    #[test]
    fn test_new_assigns_indices() {
        let mut unit = UnitSpec::new("MIN", 60);
        unit.index = 42;
        let ladder = UnitLadder::new(60_000, vec![unit, UnitSpec::new("HR", 24)]).unwrap();
        assert_eq!(ladder.unit(0).unwrap().index, 0);
        assert_eq!(ladder.unit(1).unwrap().index, 1);
    }

    #[test]
    fn test_absolute_counts() {
        let ladder = UnitLadder::standard();
        // 1 day, 1 hour, 2 minutes, 5 seconds, 500 ms
        let duration = 86_400_000 + 3_725_500;
        assert_eq!(
            ladder.absolute_counts(duration),
            vec![90_125, 1_502, 25, 1]
        );
        assert_eq!(ladder.absolute_counts(999), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_with_base_seconds() {
        let ladder = UnitLadder::standard().with_base(BaseUnit::Seconds);
        assert_eq!(ladder.base_per_smallest(), 1);
        assert_eq!(ladder.absolute_counts(3725), vec![3725, 62, 1, 0]);
    }

    #[test]
    fn test_base_per_unit() {
        let ladder = UnitLadder::standard();
        assert_eq!(ladder.base_per_unit(0), Some(1_000));
        assert_eq!(ladder.base_per_unit(1), Some(60_000));
        assert_eq!(ladder.base_per_unit(2), Some(3_600_000));
        assert_eq!(ladder.base_per_unit(3), Some(86_400_000));
        assert_eq!(ladder.base_per_unit(4), None);
    }
}
