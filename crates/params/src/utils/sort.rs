//! Sorting constants

/// Padding value used when a secret array is extended to a power-of-two length
///
/// It is the largest byte value, so padding always sorts after every real element.
pub const FQ_SENTINEL: u8 = 0xFF;

/// Marker byte leading every real record in a padded record table
pub const RECORD_REAL: u8 = 0x00;

/// Marker byte leading every padding record; sorts after all real records
pub const RECORD_PAD: u8 = 0x01;

/// Width of the original-index suffix appended to each column record
pub const RECORD_INDEX_BYTES: usize = 2;
