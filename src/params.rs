use crate::error::ParamError;
use crate::gf::Galois;

/// A fixed field: reduction polynomial and symbol width.
pub trait FieldParams: Clone + Copy + 'static {
    const POLYNOMIAL: u32;
    const WIDTH: u32;
    const MAX: usize = (1usize << Self::WIDTH) - 1;
}

#[derive(Clone, Copy, Debug)]
pub struct Gf8Params;
impl FieldParams for Gf8Params {
    const POLYNOMIAL: u32 = 0x1D;
    const WIDTH: u32 = 8;
}

#[derive(Clone, Copy, Debug)]
pub struct Gf16Params;
impl FieldParams for Gf16Params {
    const POLYNOMIAL: u32 = 0x1100B;
    const WIDTH: u32 = 16;
}

/// Number of parity symbols for a code over a given field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParityParams {
    pub npar: usize,
}

impl ParityParams {
    pub fn new(npar: usize) -> Self {
        Self { npar }
    }

    pub fn validate(&self, gf: &Galois) -> Result<(), ParamError> {
        if self.npar < 1 {
            return Err(ParamError::InvalidNpar(self.npar));
        }
        if self.npar >= gf.max() {
            return Err(ParamError::NparTooLarge { npar: self.npar, max: gf.max() });
        }
        Ok(())
    }

    /// `data_len` symbols plus parity must fit in one cycle of α, whose
    /// length is `max`.
    pub fn validate_codeword(&self, max: usize, data_len: usize) -> Result<(), ParamError> {
        let length = data_len + self.npar;
        if length > max {
            return Err(ParamError::CodewordTooLong { length, max });
        }
        Ok(())
    }
}
