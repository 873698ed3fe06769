//! Boundary byte classification.

/// Synthetic byte fed once at end of input. Always a boundary.
pub const END_OF_STREAM: u8 = 0;

/// Bytes that may precede or follow a whole-word match, besides
/// [`END_OF_STREAM`].
pub const BOUNDARY_BYTES: &[u8] = b" \t\n\r()[]{}<>/\\|\"'`~!@#$%^&?*-+=.,;:";

/// Lookup table indexed by byte value.
static BOUNDARY_TABLE: [bool; 256] = build_table();

const fn build_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[END_OF_STREAM as usize] = true;
    let mut i = 0;
    while i < BOUNDARY_BYTES.len() {
        table[BOUNDARY_BYTES[i] as usize] = true;
        i += 1;
    }
    table
}

/// Returns true if `byte` delimits words.
#[inline]
pub fn is_boundary(byte: u8) -> bool {
    BOUNDARY_TABLE[byte as usize]
}
