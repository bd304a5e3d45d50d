//! DigitMatch classifies one segmented grid cell as blank or a digit 1-9.
//!
//! The crate slides fixed 24x16 reference glyphs over a binary cell buffer,
//! scores every placement by pixel agreement, and applies per-digit
//! acceptance thresholds with a deterministic tie-break. Optional digit
//! parallelism is available via the `rayon` feature and diagnostics via the
//! `tracing` feature.

pub mod cell;
pub mod classify;
pub mod io;
pub mod scan;
pub mod template;
mod trace;
pub mod util;

pub use cell::{CellBuffer, MAX_CELL_HEIGHT, MAX_CELL_WIDTH, MIN_CELL_HEIGHT, MIN_CELL_WIDTH};
pub use classify::{Classification, Classifier, Thresholds, THRESHOLD_COUNT};
pub use io::{cell_file_bytes, parse_cell_bytes, read_cell_file};
pub use scan::{best_agreement, match_scores};
pub use template::{DIGIT_COUNT, TEMPLATE_AREA, TEMPLATE_HEIGHT, TEMPLATE_WIDTH};
pub use util::{DigitMatchError, DigitMatchResult};
