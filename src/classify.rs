//! Blank detection, acceptance thresholds, and digit selection.
//!
//! Classification runs in two strictly ordered phases. The blank check
//! short-circuits: once the white ratio clears its threshold the digit
//! scan never runs and no digit threshold is evaluated. Otherwise every
//! digit ratio is computed and the eligible digits are scanned in
//! ascending order, a later digit replacing the current pick only on a
//! strictly greater ratio.

use crate::cell::CellBuffer;
use crate::scan;
use crate::template::{DIGIT_COUNT, TEMPLATE_AREA};
use crate::trace::trace_event;
use crate::util::{DigitMatchError, DigitMatchResult};

/// Number of acceptance thresholds: index 0 is blank, 1..=9 are digits.
pub const THRESHOLD_COUNT: usize = DIGIT_COUNT + 1;

/// Smallest accepted threshold value.
pub const MIN_THRESHOLD: f64 = 0.05;
/// Largest accepted threshold value.
pub const MAX_THRESHOLD: f64 = 1.0;

/// Validated acceptance thresholds, one per class.
///
/// Values are final fractions, not percentages. Out-of-range values are a
/// configuration error, never clamped.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
    values: [f64; THRESHOLD_COUNT],
}

impl Thresholds {
    /// Validates that every threshold lies in [0.05, 1.0].
    pub fn new(values: [f64; THRESHOLD_COUNT]) -> DigitMatchResult<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
                return Err(DigitMatchError::ThresholdOutOfRange { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Threshold for the blank check.
    pub fn blank(&self) -> f64 {
        self.values[0]
    }

    /// Threshold for `digit` in 1..=9.
    pub fn digit(&self, digit: usize) -> f64 {
        self.values[digit]
    }
}

/// Final label and its supporting ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// 0 for blank (or no eligible digit), 1..=9 for a recognized digit.
    pub label: u8,
    /// White ratio for label 0, agreement ratio for a digit label.
    pub confidence: f64,
}

/// Two-phase cell classifier.
pub struct Classifier {
    thresholds: Thresholds,
    parallel: bool,
}

impl Classifier {
    /// Creates a classifier with the given validated thresholds.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            parallel: false,
        }
    }

    /// Scans the nine glyphs on the rayon pool when the `rayon` feature is
    /// enabled; results are identical either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Classifies one cell buffer.
    pub fn classify(&self, cell: &CellBuffer) -> Classification {
        // Phase 1: blank check. A hit skips digit matching entirely.
        let white_ratio = cell.white_ratio();
        if white_ratio > self.thresholds.blank() {
            trace_event!("cell_blank", white_ratio = white_ratio);
            return Classification {
                label: 0,
                confidence: white_ratio,
            };
        }

        // Phase 2: digit matching over all nine glyphs.
        #[cfg(feature = "rayon")]
        let scores = if self.parallel {
            scan::match_scores_par(cell)
        } else {
            scan::match_scores(cell)
        };
        #[cfg(not(feature = "rayon"))]
        let scores = {
            let _ = self.parallel;
            scan::match_scores(cell)
        };

        let result = match select_digit(&scores, &self.thresholds) {
            Some((label, confidence)) => Classification { label, confidence },
            // No digit cleared its threshold: report blank, carrying the
            // phase-1 white ratio as the confidence.
            None => Classification {
                label: 0,
                confidence: white_ratio,
            },
        };
        trace_event!(
            "cell_classified",
            label = result.label,
            confidence = result.confidence,
        );
        result
    }
}

/// Picks the best eligible digit, scanning 1..=9 in ascending order.
///
/// The first eligible digit becomes the pick; a later one replaces it only
/// with a strictly greater ratio, so exact ties keep the lower digit.
fn select_digit(scores: &[u32; DIGIT_COUNT], thresholds: &Thresholds) -> Option<(u8, f64)> {
    let mut best: Option<(u8, f64)> = None;
    for (digit_idx, &score) in scores.iter().enumerate() {
        let digit = digit_idx + 1;
        let ratio = f64::from(score) / TEMPLATE_AREA as f64;
        if ratio <= thresholds.digit(digit) {
            continue;
        }
        let replace = match best {
            None => true,
            Some((_, best_ratio)) => ratio > best_ratio,
        };
        if replace {
            best = Some((digit as u8, ratio));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_thresholds(value: f64) -> Thresholds {
        Thresholds::new([value; THRESHOLD_COUNT]).unwrap()
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let mut values = [0.5; THRESHOLD_COUNT];
        values[3] = 1.2;
        let err = Thresholds::new(values).err().unwrap();
        assert_eq!(
            err,
            DigitMatchError::ThresholdOutOfRange {
                index: 3,
                value: 1.2
            }
        );

        values[3] = 0.01;
        let err = Thresholds::new(values).err().unwrap();
        assert_eq!(
            err,
            DigitMatchError::ThresholdOutOfRange {
                index: 3,
                value: 0.01
            }
        );
    }

    #[test]
    fn boundary_thresholds_are_accepted() {
        assert!(Thresholds::new([MIN_THRESHOLD; THRESHOLD_COUNT]).is_ok());
        assert!(Thresholds::new([MAX_THRESHOLD; THRESHOLD_COUNT]).is_ok());
    }

    #[test]
    fn tie_keeps_the_lower_digit() {
        let thresholds = uniform_thresholds(0.5);
        // Digits 2 and 7 tie above threshold.
        let mut scores = [0u32; DIGIT_COUNT];
        scores[1] = 300;
        scores[6] = 300;
        assert_eq!(
            select_digit(&scores, &thresholds),
            Some((2, 300.0 / TEMPLATE_AREA as f64))
        );
    }

    #[test]
    fn strictly_greater_ratio_replaces_the_pick() {
        let thresholds = uniform_thresholds(0.5);
        let mut scores = [0u32; DIGIT_COUNT];
        scores[0] = 300;
        scores[8] = 301;
        assert_eq!(
            select_digit(&scores, &thresholds),
            Some((9, 301.0 / TEMPLATE_AREA as f64))
        );
    }

    #[test]
    fn threshold_must_be_strictly_exceeded() {
        let thresholds = uniform_thresholds(0.5);
        // 192/384 equals the threshold exactly: not eligible.
        let scores = [192u32; DIGIT_COUNT];
        assert_eq!(select_digit(&scores, &thresholds), None);
    }
}
