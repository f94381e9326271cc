//! GF(2^w) arithmetic and the Reed–Solomon primitives built on it: generator
//! and byte-wide parity tables, syndromes, and Forney error magnitudes.
//!
//! Locating errors (Berlekamp–Massey, Chien search) is left to the caller.

pub mod error;
pub mod gf;
pub mod params;
pub mod parity;

pub use error::*;
pub use gf::*;
pub use params::*;
pub use parity::*;
