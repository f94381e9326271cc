pub mod galois;
pub mod poly;

pub use galois::*;
pub use poly::*;

/// A received or emitted symbol: 8-bit blocks and 16-bit blocks share the
/// same code paths.
pub trait Symbol: Copy + Into<u16> {}

impl Symbol for u8 {}
impl Symbol for u16 {}
