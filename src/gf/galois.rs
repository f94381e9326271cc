use once_cell::sync::Lazy;

use crate::error::GfError;
use crate::params::{FieldParams, Gf16Params, Gf8Params};

/// GF(2^8) over x^8 + x^4 + x^3 + x^2 + 1.
pub static GF8: Lazy<Galois> = Lazy::new(|| {
    Galois::from_params::<Gf8Params>().expect("0x1D is primitive for w=8")
});

/// GF(2^16) over x^16 + x^12 + x^3 + x + 1.
pub static GF16: Lazy<Galois> = Lazy::new(|| {
    Galois::from_params::<Gf16Params>().expect("0x1100B is primitive for w=16")
});

/// Exponential/logarithm tables for GF(2^w), `w <= 16`.
///
/// `exp` holds `2 * max` entries so that the sum of two logarithms indexes it
/// without a modulo; `log[0]` is unused.
#[derive(Clone, Debug)]
pub struct Galois {
    polynomial: u32,
    width: u32,
    max: usize,
    sym_start: usize,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl Galois {
    /// Walks the multiplicative cycle of α and fails if it does not visit
    /// every nonzero element.
    pub fn new(polynomial: u32, width: u32) -> Result<Self, GfError> {
        if width == 0 || width > 16 {
            return Err(GfError::UnsupportedWidth(width));
        }
        let _span = tracing::debug_span!("galois tables", polynomial, width).entered();

        let max = (1usize << width) - 1;
        let mask = max as u32;
        let mut exp = vec![0u16; max * 2];
        let mut log = vec![0u16; max + 1];

        let mut d: u32 = 1;
        for i in 0..max {
            if d == 0 || (i > 0 && d == 1) {
                return Err(GfError::NotPrimitive { polynomial, width, cycle: i });
            }
            exp[i] = d as u16;
            exp[max + i] = d as u16;
            log[d as usize] = i as u16;
            d <<= 1;
            if (d >> width) & 1 != 0 {
                d = (d ^ polynomial) & mask;
            }
        }
        if d != 1 {
            return Err(GfError::NotPrimitive { polynomial, width, cycle: max });
        }

        tracing::debug!(max, "exp/log tables built");
        Ok(Self { polynomial, width, max, sym_start: 0, exp, log })
    }

    pub fn from_params<P: FieldParams>() -> Result<Self, GfError> {
        Self::new(P::POLYNOMIAL, P::WIDTH)
    }

    /// Sets the exponent of the first consecutive root used by generators,
    /// syndromes and decode tables.
    pub fn with_sym_start(mut self, sym_start: usize) -> Self {
        self.sym_start = sym_start % self.max;
        self
    }

    #[inline] pub fn max(&self) -> usize { self.max }
    #[inline] pub fn width(&self) -> u32 { self.width }
    #[inline] pub fn polynomial(&self) -> u32 { self.polynomial }
    #[inline] pub fn sym_start(&self) -> usize { self.sym_start }
    #[inline] pub fn exp_table(&self) -> &[u16] { &self.exp }
    #[inline] pub fn log_table(&self) -> &[u16] { &self.log }

    /// α^i for `i < 2 * max`.
    #[inline]
    pub fn to_exp(&self, i: usize) -> u16 {
        self.exp[i]
    }

    /// Discrete logarithm of a nonzero element.
    #[inline]
    pub fn to_log(&self, a: u16) -> usize {
        debug_assert!(a != 0, "zero has no logarithm");
        self.log[a as usize] as usize
    }

    /// α^i for any `i`.
    #[inline]
    pub fn pow_alpha(&self, i: usize) -> u16 {
        self.exp[i % self.max]
    }

    /// Symbol index of the error located at `a = α^p` in a block of `length`
    /// symbols, highest degree first. `None` if `a` is zero or its degree
    /// does not fit in the block.
    #[inline]
    pub fn to_pos(&self, length: usize, a: u16) -> Option<usize> {
        if a == 0 {
            return None;
        }
        length.checked_sub(1)?.checked_sub(self.to_log(a))
    }

    #[inline]
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// a * α^e
    #[inline]
    pub fn mul_exp(&self, a: u16, e: usize) -> u16 {
        if a == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + e % self.max]
    }

    #[inline]
    pub fn div(&self, a: u16, b: u16) -> Result<u16, GfError> {
        if b == 0 {
            return Err(GfError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let la = self.log[a as usize] as usize;
        let lb = self.log[b as usize] as usize;
        Ok(self.exp[la + self.max - lb])
    }

    /// a / α^e
    #[inline]
    pub fn div_exp(&self, a: u16, e: usize) -> u16 {
        if a == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.max - e % self.max]
    }

    #[inline]
    pub fn inv(&self, a: u16) -> Result<u16, GfError> {
        if a == 0 {
            return Err(GfError::ZeroInverse);
        }
        Ok(self.exp[self.max - self.log[a as usize] as usize])
    }
}
