//! Duration symbols and beat arithmetic
//!
//! Durations are stored semantically as rational beat values (one quarter
//! note = 1 beat) rather than floats, so measure sums stay exact.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

/// Note duration, keyed by notation symbol.
///
/// The serde representation is the notation symbol itself, so a
/// `NoteEvent` crosses the JS boundary with `duration: "q"` etc.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Duration {
    #[serde(rename = "w")]
    Whole,
    #[serde(rename = "h")]
    Half,
    #[serde(rename = "q")]
    Quarter,
    #[serde(rename = "8")]
    Eighth,
    #[serde(rename = "16")]
    Sixteenth,
}

impl Duration {
    /// All durations, largest first. Greedy filler decomposition walks
    /// this order.
    pub const DESCENDING: [Duration; 5] = [
        Duration::Whole,
        Duration::Half,
        Duration::Quarter,
        Duration::Eighth,
        Duration::Sixteenth,
    ];

    /// Look up a notation symbol. Anything outside the duration table
    /// is rejected.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "w" => Some(Duration::Whole),
            "h" => Some(Duration::Half),
            "q" => Some(Duration::Quarter),
            "8" => Some(Duration::Eighth),
            "16" => Some(Duration::Sixteenth),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Duration::Whole => "w",
            Duration::Half => "h",
            Duration::Quarter => "q",
            Duration::Eighth => "8",
            Duration::Sixteenth => "16",
        }
    }

    /// Beat value per the fixed table: w=4, h=2, q=1, 8=1/2, 16=1/4.
    pub fn beats(&self) -> Rational32 {
        match self {
            Duration::Whole => Rational32::from_integer(4),
            Duration::Half => Rational32::from_integer(2),
            Duration::Quarter => Rational32::from_integer(1),
            Duration::Eighth => Rational32::new(1, 2),
            Duration::Sixteenth => Rational32::new(1, 4),
        }
    }

    /// Largest tabled duration whose beat value does not exceed `beats`,
    /// if any (`beats` below a sixteenth has no fit).
    pub fn largest_fitting(beats: Rational32) -> Option<Self> {
        Duration::DESCENDING
            .into_iter()
            .find(|d| d.beats() <= beats)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Beat value for a duration symbol; `None` is the unknown-duration
/// condition surfaced as a parse error by the grammar.
pub fn beats_of(symbol: &str) -> Option<Rational32> {
    Duration::from_symbol(symbol).map(|d| d.beats())
}

/// Beats left in the current measure after `consumed` beats:
/// `max(0, capacity - (consumed mod capacity))`.
pub fn beats_remaining(consumed: Rational32, capacity: Rational32) -> Rational32 {
    let remaining = capacity - consumed % capacity;
    remaining.max(Rational32::from_integer(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_table() {
        assert_eq!(beats_of("w"), Some(Rational32::from_integer(4)));
        assert_eq!(beats_of("h"), Some(Rational32::from_integer(2)));
        assert_eq!(beats_of("q"), Some(Rational32::from_integer(1)));
        assert_eq!(beats_of("8"), Some(Rational32::new(1, 2)));
        assert_eq!(beats_of("16"), Some(Rational32::new(1, 4)));
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        assert_eq!(beats_of("x"), None);
        assert_eq!(beats_of("32"), None);
        assert_eq!(beats_of(""), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for duration in Duration::DESCENDING {
            assert_eq!(Duration::from_symbol(duration.symbol()), Some(duration));
        }
    }

    #[test]
    fn test_beats_remaining() {
        let capacity = Rational32::from_integer(4);
        assert_eq!(
            beats_remaining(Rational32::new(7, 2), capacity),
            Rational32::new(1, 2)
        );
        assert_eq!(
            beats_remaining(Rational32::from_integer(1), capacity),
            Rational32::from_integer(3)
        );
        // A fully consumed measure leaves a full fresh measure ahead.
        assert_eq!(beats_remaining(capacity, capacity), capacity);
        assert_eq!(
            beats_remaining(Rational32::from_integer(0), capacity),
            capacity
        );
    }

    #[test]
    fn test_largest_fitting() {
        assert_eq!(
            Duration::largest_fitting(Rational32::new(3, 4)),
            Some(Duration::Eighth)
        );
        assert_eq!(
            Duration::largest_fitting(Rational32::from_integer(2)),
            Some(Duration::Half)
        );
        assert_eq!(Duration::largest_fitting(Rational32::new(1, 8)), None);
    }
}
