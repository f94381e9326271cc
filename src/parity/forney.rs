//! Error magnitude by Forney's formula, `e = X * ω(X⁻¹) / σ'(X⁻¹)`.
//!
//! The locator `sigma` and evaluator `omega` come from an external solver;
//! `ps = X = α^p` is a root position that solver has already established.

use crate::error::GfError;
use crate::gf::{Galois, LogPoly, ValuePoly};

impl Galois {
    /// Log-form `sigma` and `omega`. `jisu` is the number of error terms:
    /// `omega[..jisu]` and the odd coefficients of `sigma` up to degree `jisu`
    /// are read.
    pub fn forney(&self, jisu: usize, ps: u16, sigma: &LogPoly, omega: &LogPoly) -> Result<u16, GfError> {
        check_lengths(jisu, sigma.len(), omega.len())?;
        self.forney_with(jisu, ps, |j| self.log_to_value(sigma[j]), |j| self.log_to_value(omega[j]))
    }

    /// Same as [`Galois::forney`] with value-form polynomials.
    pub fn forney_values(&self, jisu: usize, ps: u16, sigma: &ValuePoly, omega: &ValuePoly) -> Result<u16, GfError> {
        check_lengths(jisu, sigma.len(), omega.len())?;
        self.forney_with(jisu, ps, |j| sigma[j], |j| omega[j])
    }

    fn forney_with(
        &self,
        jisu: usize,
        ps: u16,
        sigma: impl Fn(usize) -> u16,
        omega: impl Fn(usize) -> u16,
    ) -> Result<u16, GfError> {
        if ps == 0 {
            return Err(GfError::ZeroInverse);
        }
        let max = self.max();
        // log of z = ps⁻¹
        let zlog = max - self.to_log(ps);

        // ω(z)
        let mut ov = omega(0);
        for j in 1..jisu {
            ov ^= self.mul_exp(omega(j), zlog * j % max);
        }

        // σ'(z): only odd-degree coefficients of σ survive
        let mut dv = sigma(1);
        for j in (2..jisu).step_by(2) {
            dv ^= self.mul_exp(sigma(j + 1), zlog * j % max);
        }

        Ok(self.mul(ps, self.div(ov, dv)?))
    }
}

fn check_lengths(jisu: usize, sigma_len: usize, omega_len: usize) -> Result<(), GfError> {
    let sigma_need = if jisu > 2 { (jisu - 1) / 2 * 2 + 2 } else { 2 };
    if sigma_len < sigma_need {
        return Err(GfError::BufferTooShort { name: "sigma", expected: sigma_need, got: sigma_len });
    }
    let omega_need = jisu.max(1);
    if omega_len < omega_need {
        return Err(GfError::BufferTooShort { name: "omega", expected: omega_need, got: omega_len });
    }
    Ok(())
}
