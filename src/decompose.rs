//! Breaks a raw duration into the two units shown by the timer face.
//!
//! The face always shows two adjacent units of a [`UnitLadder`]: the most
//! significant unit with a non-zero count on top, and the next smaller
//! unit, wrapped to its divisor, underneath. With the standard ladder
//! 3 725 000 ms (1 h 2 min 5 s) shows `HR 1` over `MIN 2`; the seconds are
//! dropped because only two units fit.
//!
//! The decomposer is stateful. A duration too small to register in any
//! unit leaves the face untouched until some non-zero duration has been
//! shown; from then on such a duration resets the face to the two lowest
//! units with value `0`.
//!
//! ```rust
//! use circle_timer::decompose::Decomposer;
//! use circle_timer::ladder::UnitLadder;
//!
//! let ladder = UnitLadder::standard();
//! let mut decomposer = Decomposer::new(&ladder);
//!
//! let pair = decomposer.decompose(3_725_000, &ladder);
//! assert_eq!((pair.top_label.as_str(), pair.top_value.as_str()), ("HR", "1"));
//! assert_eq!((pair.bottom_label.as_str(), pair.bottom_value.as_str()), ("MIN", "2"));
//! ```

use tracing::debug;

use crate::ladder::UnitLadder;

/// The two label/value pairs rendered on the timer face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    /// Label of the more significant unit.
    pub top_label: String,
    /// Count of the more significant unit.
    pub top_value: String,
    /// Label of the less significant unit.
    pub bottom_label: String,
    /// Count of the less significant unit, wrapped to its divisor.
    pub bottom_value: String,
}

impl DisplayPair {
    /// The two lowest units of `ladder`, both showing `0`.
    pub fn lowest(ladder: &UnitLadder) -> Self {
        let units = ladder.units();
        Self {
            top_label: units[1].label.clone(),
            top_value: "0".to_string(),
            bottom_label: units[0].label.clone(),
            bottom_value: "0".to_string(),
        }
    }
}

/// Stateful duration decomposer.
#[derive(Debug, Clone)]
pub struct Decomposer {
    pair: DisplayPair,
    top_index: usize,
    time_not_zero: bool,
}

impl Decomposer {
    /// Creates a decomposer showing the initial face for `ladder`.
    pub fn new(ladder: &UnitLadder) -> Self {
        Self {
            pair: DisplayPair::lowest(ladder),
            top_index: 1,
            time_not_zero: false,
        }
    }

    /// The pair currently on the face.
    pub fn display(&self) -> &DisplayPair {
        &self.pair
    }

    /// Ladder index of the unit currently on top.
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// Whether a non-zero duration has ever been decomposed.
    pub fn time_not_zero(&self) -> bool {
        self.time_not_zero
    }

    /// Returns to the initial face and forgets the non-zero history.
    pub fn reset(&mut self, ladder: &UnitLadder) {
        *self = Self::new(ladder);
    }

    /// Recomputes the face for `duration` (in the ladder's base unit).
    pub fn decompose(&mut self, duration: u64, ladder: &UnitLadder) -> &DisplayPair {
        let counts = ladder.absolute_counts(duration);

        if counts.iter().all(|&c| c == 0) {
            if self.time_not_zero {
                self.pair = DisplayPair::lowest(ladder);
                self.top_index = 1;
            }
            debug!(duration, time_not_zero = self.time_not_zero, "zero duration");
            return &self.pair;
        }

        self.time_not_zero = true;

        // Most significant non-zero unit, never lower than index 1 so a
        // bottom unit always exists.
        let top = (1..counts.len())
            .rev()
            .find(|&i| counts[i] != 0)
            .unwrap_or(1);
        let bottom = top - 1;
        let units = ladder.units();

        self.top_index = top;
        self.pair = DisplayPair {
            top_label: units[top].label.clone(),
            top_value: counts[top].to_string(),
            bottom_label: units[bottom].label.clone(),
            bottom_value: (counts[bottom] % units[bottom].divisor).to_string(),
        };

        debug!(
            duration,
            top = %self.pair.top_label,
            top_value = %self.pair.top_value,
            bottom = %self.pair.bottom_label,
            bottom_value = %self.pair.bottom_value,
            "decomposed"
        );

        &self.pair
    }
}
