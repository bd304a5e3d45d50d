//! The digit-parallel scan must return exactly the serial scores.

#![cfg(feature = "rayon")]

use digitmatch::scan::{match_scores, match_scores_par};
use digitmatch::CellBuffer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn parallel_scores_equal_serial_scores() {
    let mut rng = StdRng::seed_from_u64(9001);
    for _ in 0..4 {
        let width = rng.random_range(16..=80);
        let height = rng.random_range(24..=80);
        let pixels: Vec<u8> = (0..width * height)
            .map(|_| u8::from(rng.random_bool(0.5)))
            .collect();
        let cell = CellBuffer::new(pixels, width, height).unwrap();

        assert_eq!(match_scores(&cell), match_scores_par(&cell));
    }
}
