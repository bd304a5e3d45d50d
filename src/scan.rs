//! Sliding-window agreement scan.
//!
//! `best_agreement` tries a digit glyph at every candidate top-left offset
//! inside the cell and counts, per placement, how many of the 384 glyph
//! positions carry the same value in the cell. The offset loops stop short
//! of the bottom/right flush placements (`< height - 24`, `< width - 16`,
//! strict); downstream report output depends on exactly this placement
//! range, so the bound must not be widened to `<=`.

use crate::cell::CellBuffer;
use crate::template::{self, DIGIT_COUNT, TEMPLATE_AREA, TEMPLATE_HEIGHT, TEMPLATE_WIDTH};
use crate::trace::{trace_event, trace_span};

/// Highest agreement count for one digit over every tried placement.
///
/// Returns 0 when the cell is too small for any placement to be tried
/// (height <= 24 or width <= 16). A perfect 384 ends the scan early; no
/// later placement can beat it and equal scores never replace the maximum.
pub fn best_agreement(cell: &CellBuffer, digit_idx: usize) -> u32 {
    let _span = trace_span!("digit_scan", digit = digit_idx + 1).entered();

    let row_range = cell.height().saturating_sub(TEMPLATE_HEIGHT);
    let col_range = cell.width().saturating_sub(TEMPLATE_WIDTH);

    let mut best = 0u32;
    for i in 0..row_range {
        for j in 0..col_range {
            let mut agree = 0u32;
            for x in 0..TEMPLATE_HEIGHT {
                let row = cell.row(i + x);
                for y in 0..TEMPLATE_WIDTH {
                    if row[j + y] == template::bit_at(digit_idx, x, y) {
                        agree += 1;
                    }
                }
            }
            if agree > best {
                best = agree;
                if best as usize == TEMPLATE_AREA {
                    trace_event!("digit_scan_done", digit = digit_idx + 1, best = best);
                    return best;
                }
            }
        }
    }

    trace_event!("digit_scan_done", digit = digit_idx + 1, best = best);
    best
}

/// Best agreement counts for all nine digits, in digit order.
pub fn match_scores(cell: &CellBuffer) -> [u32; DIGIT_COUNT] {
    let mut scores = [0u32; DIGIT_COUNT];
    for (digit_idx, slot) in scores.iter_mut().enumerate() {
        *slot = best_agreement(cell, digit_idx);
    }
    scores
}

/// Digit-parallel variant of [`match_scores`].
///
/// The nine per-digit scans are independent, so they split cleanly across
/// the rayon pool; results are bit-identical to the serial scan.
#[cfg(feature = "rayon")]
pub fn match_scores_par(cell: &CellBuffer) -> [u32; DIGIT_COUNT] {
    use rayon::prelude::*;

    let scores: Vec<u32> = (0..DIGIT_COUNT)
        .into_par_iter()
        .map(|digit_idx| best_agreement(cell, digit_idx))
        .collect();
    scores.try_into().expect("one score per digit")
}
