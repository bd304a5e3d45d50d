//! Cell file loading.
//!
//! A cell file carries two little-endian `u32` words (width, then height)
//! followed by exactly `width * height` row-major pixel bytes. Dimension
//! bounds are checked before the payload length, so an oversized header
//! fails as `InvalidDimension` even when the payload is also wrong.

use std::fs;
use std::path::Path;

use crate::cell::CellBuffer;
use crate::util::{DigitMatchError, DigitMatchResult};

const HEADER_LEN: usize = 8;

/// Parses an in-memory cell file image into a validated [`CellBuffer`].
pub fn parse_cell_bytes(bytes: &[u8]) -> DigitMatchResult<CellBuffer> {
    if bytes.len() < HEADER_LEN {
        return Err(DigitMatchError::ResourceUnavailable {
            context: "cell header",
            reason: format!("{} bytes, need {HEADER_LEN}", bytes.len()),
        });
    }
    let width = u32::from_le_bytes(bytes[0..4].try_into().expect("4-byte slice")) as usize;
    let height = u32::from_le_bytes(bytes[4..8].try_into().expect("4-byte slice")) as usize;

    CellBuffer::new(bytes[HEADER_LEN..].to_vec(), width, height)
}

/// Reads and parses a cell file from disk.
pub fn read_cell_file<P: AsRef<Path>>(path: P) -> DigitMatchResult<CellBuffer> {
    let bytes = fs::read(path).map_err(|err| DigitMatchError::ResourceUnavailable {
        context: "cell file",
        reason: err.to_string(),
    })?;
    parse_cell_bytes(&bytes)
}

/// Serializes a cell buffer back into the wire format.
///
/// Round-trips through [`parse_cell_bytes`]; used by tests and tooling that
/// synthesize cell files.
pub fn cell_file_bytes(cell: &CellBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + cell.pixels().len());
    bytes.extend_from_slice(&(cell.width() as u32).to_le_bytes());
    bytes.extend_from_slice(&(cell.height() as u32).to_le_bytes());
    bytes.extend_from_slice(cell.pixels());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_header_is_unavailable() {
        let err = parse_cell_bytes(&[1, 2, 3]).err().unwrap();
        assert!(matches!(
            err,
            DigitMatchError::ResourceUnavailable {
                context: "cell header",
                ..
            }
        ));
    }

    #[test]
    fn dimension_bounds_are_checked_before_payload_length() {
        // width 8 is out of range; the empty payload must not turn this
        // into a size mismatch.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&24u32.to_le_bytes());
        let err = parse_cell_bytes(&bytes).err().unwrap();
        assert_eq!(
            err,
            DigitMatchError::InvalidDimension {
                name: "width",
                value: 8,
                min: crate::cell::MIN_CELL_WIDTH,
                max: crate::cell::MAX_CELL_WIDTH,
            }
        );
    }

    #[test]
    fn wire_format_round_trips() {
        let pixels: Vec<u8> = (0..16 * 24).map(|i| (i % 2) as u8).collect();
        let cell = CellBuffer::new(pixels.clone(), 16, 24).unwrap();
        let parsed = parse_cell_bytes(&cell_file_bytes(&cell)).unwrap();
        assert_eq!(parsed.width(), 16);
        assert_eq!(parsed.height(), 24);
        assert_eq!(parsed.pixels(), pixels.as_slice());
    }
}
