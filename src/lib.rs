// growable bit array used as the slot index behind membership filters
// bits are packed LSB-first, 8 per byte, and the byte count alone encodes capacity

pub mod dsa;
pub mod error;

pub use dsa::bit_array::BitArray;
pub use error::{BitArrayError, Result};
