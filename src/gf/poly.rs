//! Polynomials over GF(2^w) in two representations.
//!
//! [`ValuePoly`] stores raw field elements. [`LogPoly`] stores discrete
//! logarithms with [`LOG_ZERO`] standing in for the zero element, so that
//! scalar products become integer additions mod `max`. Coefficient `i` is the
//! coefficient of `x^i` in both forms.

use std::ops::{Add, Index};

use super::galois::Galois;
use crate::error::GfError;

/// Log-form sentinel for the zero element.
pub const LOG_ZERO: i32 = -1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValuePoly(Vec<u16>);

/// Any negative exponent is read as the zero element; non-negative exponents
/// are taken mod `max`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogPoly(Vec<i32>);

impl ValuePoly {
    pub fn new(coeffs: Vec<u16>) -> Self {
        Self(coeffs)
    }
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }
    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    #[inline] pub fn as_slice(&self) -> &[u16] { &self.0 }
}

impl LogPoly {
    pub fn new(coeffs: Vec<i32>) -> Self {
        Self(coeffs)
    }
    /// `len` zero coefficients.
    pub fn zeros(len: usize) -> Self {
        Self(vec![LOG_ZERO; len])
    }
    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    #[inline] pub fn as_slice(&self) -> &[i32] { &self.0 }
}

impl From<Vec<u16>> for ValuePoly {
    fn from(v: Vec<u16>) -> Self {
        Self(v)
    }
}

impl From<Vec<i32>> for LogPoly {
    fn from(v: Vec<i32>) -> Self {
        Self(v)
    }
}

/// Coefficient-wise XOR; the shorter operand is zero-extended.
impl<'a> Add<&'a ValuePoly> for &'a ValuePoly {
    type Output = ValuePoly;

    fn add(self, other: &'a ValuePoly) -> ValuePoly {
        let (long, short) = if self.len() >= other.len() { (self, other) } else { (other, self) };
        let mut out = long.0.clone();
        for (o, &s) in out.iter_mut().zip(&short.0) {
            *o ^= s;
        }
        ValuePoly(out)
    }
}

impl Index<usize> for ValuePoly {
    type Output = u16;
    fn index(&self, i: usize) -> &u16 {
        &self.0[i]
    }
}

impl Index<usize> for LogPoly {
    type Output = i32;
    fn index(&self, i: usize) -> &i32 {
        &self.0[i]
    }
}

impl Galois {
    /// Sentinel maps to 0; other exponents are reduced mod `max`.
    #[inline]
    pub fn log_to_value(&self, e: i32) -> u16 {
        if e < 0 { 0 } else { self.pow_alpha(e as usize) }
    }

    /// 0 maps to the sentinel.
    #[inline]
    pub fn value_to_log(&self, v: u16) -> i32 {
        if v == 0 { LOG_ZERO } else { self.to_log(v) as i32 }
    }

    pub fn to_log_poly(&self, p: &ValuePoly) -> LogPoly {
        LogPoly(p.0.iter().map(|&v| self.value_to_log(v)).collect())
    }

    pub fn to_value_poly(&self, p: &LogPoly) -> ValuePoly {
        ValuePoly(p.0.iter().map(|&e| self.log_to_value(e)).collect())
    }

    // --- log-form scalars ---

    #[inline]
    pub fn log_add(&self, a: i32, b: i32) -> i32 {
        self.value_to_log(self.log_to_value(a) ^ self.log_to_value(b))
    }

    /// Adds the scalar `b` to every coefficient of `a`.
    pub fn log_add_scalar(&self, a: &LogPoly, b: i32) -> LogPoly {
        let bv = self.log_to_value(b);
        LogPoly(a.0.iter().map(|&e| self.value_to_log(self.log_to_value(e) ^ bv)).collect())
    }

    #[inline]
    pub fn log_mul(&self, a: i32, b: i32) -> i32 {
        if a < 0 || b < 0 {
            return LOG_ZERO;
        }
        ((a as usize + b as usize) % self.max()) as i32
    }

    #[inline]
    pub fn log_div(&self, a: i32, b: i32) -> Result<i32, GfError> {
        if b < 0 {
            return Err(GfError::DivisionByZero);
        }
        if a < 0 {
            return Ok(LOG_ZERO);
        }
        let max = self.max();
        Ok(((max + a as usize - b as usize % max) % max) as i32)
    }

    #[inline]
    pub fn log_pow(&self, v: i32, p: usize) -> i32 {
        if v < 0 {
            return LOG_ZERO;
        }
        ((v as u64 * p as u64) % self.max() as u64) as i32
    }

    // --- evaluation ---

    /// Evaluates the first `terms` coefficients of `poly` at the point whose
    /// logarithm is `value`. Each term is computed on its own and XORed in.
    pub fn log_substitute(&self, poly: &LogPoly, value: i32, terms: usize) -> i32 {
        if value < 0 {
            return poly.0.first().copied().filter(|_| terms > 0).unwrap_or(LOG_ZERO);
        }
        let max = self.max() as u64;
        let mut sum = 0u16;
        for (p, &c) in poly.0.iter().take(terms).enumerate() {
            if c < 0 {
                continue;
            }
            let pow = (c as u64 + value as u64 * p as u64) % max;
            sum ^= self.to_exp(pow as usize);
        }
        self.value_to_log(sum)
    }

    /// Horner evaluation of a value-form polynomial.
    pub fn eval_poly(&self, poly: &ValuePoly, x: u16) -> u16 {
        poly.0.iter().rev().fold(0, |acc, &c| self.mul(acc, x) ^ c)
    }

    /// Formal derivative in log form. Output index `i` is the sentinel for
    /// even `i` and the input coefficient `i + 1` for odd `i`.
    pub fn log_diff(&self, a: &LogPoly) -> LogPoly {
        let n = a.len().saturating_sub(1);
        LogPoly((0..n).map(|i| if i % 2 == 0 { LOG_ZERO } else { a.0[i + 1] }).collect())
    }

    // --- products ---

    pub fn log_conv(&self, a: &LogPoly, b: &LogPoly) -> LogPoly {
        if a.is_empty() || b.is_empty() {
            return LogPoly::default();
        }
        self.log_conv_truncated(a, b, a.len() + b.len() - 1)
    }

    /// Product of `a` and `b` keeping only the `len` lowest-degree terms.
    pub fn log_conv_truncated(&self, a: &LogPoly, b: &LogPoly, len: usize) -> LogPoly {
        let mut out = vec![0i32; len];
        self.conv_log_slices(&a.0, &b.0, &mut out);
        LogPoly(out)
    }

    /// Product of `a` and `b` written into `out`, truncated to `out.len()`.
    pub fn log_conv_into(&self, a: &LogPoly, b: &LogPoly, out: &mut LogPoly) {
        self.conv_log_slices(&a.0, &b.0, &mut out.0);
    }

    fn conv_log_slices(&self, a: &[i32], b: &[i32], out: &mut [i32]) {
        // `out` accumulates raw field values, then is converted in place.
        out.fill(0);
        let len = out.len();
        for (ia, &la) in a.iter().enumerate().take(len) {
            if la < 0 {
                continue;
            }
            let ib2 = b.len().min(len - ia);
            for (ib, &lb) in b[..ib2].iter().enumerate() {
                if lb >= 0 {
                    out[ia + ib] ^= self.pow_alpha(la as usize + lb as usize) as i32;
                }
            }
        }
        for c in out.iter_mut() {
            *c = self.value_to_log(*c as u16);
        }
    }

    pub fn mul_poly(&self, a: &ValuePoly, b: &ValuePoly) -> ValuePoly {
        if a.is_empty() || b.is_empty() {
            return ValuePoly::default();
        }
        self.mul_poly_truncated(a, b, a.len() + b.len() - 1)
    }

    pub fn mul_poly_truncated(&self, a: &ValuePoly, b: &ValuePoly, len: usize) -> ValuePoly {
        let mut out = ValuePoly::zeros(len);
        self.mul_poly_into(&mut out, a, b);
        out
    }

    /// `dest = a * b`, truncated to `dest.len()`. Does not allocate.
    pub fn mul_poly_into(&self, dest: &mut ValuePoly, a: &ValuePoly, b: &ValuePoly) {
        let dest = &mut dest.0;
        dest.fill(0);
        let len = dest.len();
        for (ia, &va) in a.0.iter().enumerate().take(len) {
            if va == 0 {
                continue;
            }
            let la = self.to_log(va);
            let ib2 = b.len().min(len - ia);
            for (ib, &vb) in b.0[..ib2].iter().enumerate() {
                if vb != 0 {
                    dest[ia + ib] ^= self.to_exp(la + self.to_log(vb));
                }
            }
        }
    }
}
