//! Generator polynomial and byte-indexed product tables.
//!
//! Storage convention for the generator: index 0 holds the coefficient of
//! `x^(npar-1)`, index `npar-1` the coefficient of `x^0`. The leading
//! coefficient of `x^npar` is 1 and not stored.

use crate::error::GfError;
use crate::gf::{Galois, LogPoly, Symbol, ValuePoly};
use crate::params::ParityParams;

/// G(x) = Π (x + α^(sym_start + k)), k in 0..npar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    coeffs: Vec<u16>,
}

impl Generator {
    #[inline] pub fn npar(&self) -> usize { self.coeffs.len() }
    #[inline] pub fn coeffs(&self) -> &[u16] { &self.coeffs }

    /// The full polynomial in ascending-degree order, leading 1 included.
    pub fn to_ascending(&self) -> ValuePoly {
        let mut out: Vec<u16> = self.coeffs.iter().rev().copied().collect();
        out.push(1);
        ValuePoly::new(out)
    }
}

/// `[256][2][npar]` products: entry `(b, half, i)` is the byte `b` placed in
/// the low (`half == 0`) or high (`half == 1`) byte of a symbol, times the
/// `i`-th multiplier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityTable {
    npar: usize,
    entries: Vec<u16>,
}

impl ParityTable {
    fn build(gf: &Galois, npar: usize, multiplier_log: impl Fn(usize) -> usize) -> Self {
        let mut entries = vec![0u16; 256 * 2 * npar];
        let max = gf.max();
        for ib in 1..256usize {
            for half in 0..2 {
                let v = ib << (8 * half);
                // Bytes that are not field elements (the high byte of an 8-bit
                // field) keep zero rows.
                if v > max {
                    continue;
                }
                let logv = gf.to_log(v as u16);
                let base = (ib * 2 + half) * npar;
                for i in 0..npar {
                    entries[base + i] = gf.to_exp(logv + multiplier_log(i));
                }
            }
        }
        Self { npar, entries }
    }

    #[inline] pub fn npar(&self) -> usize { self.npar }

    #[inline]
    pub fn row(&self, byte: u8, half: usize) -> &[u16] {
        let base = (byte as usize * 2 + half) * self.npar;
        &self.entries[base..base + self.npar]
    }

    #[inline]
    pub fn get(&self, byte: u8, half: usize, i: usize) -> u16 {
        self.row(byte, half)[i]
    }

    /// `v * multiplier[i]` as two lookups.
    #[inline]
    fn product(&self, v: u16, i: usize) -> u16 {
        self.get(v as u8, 0, i) ^ self.get((v >> 8) as u8, 1, i)
    }
}

/// Every symbol of `data` must be a field element, i.e. at most `max`.
fn check_symbols<S: Symbol>(data: &[S], max: usize) -> Result<(), GfError> {
    let bad = data
        .iter()
        .map(|&s| -> u16 { s.into() })
        .enumerate()
        .find(|&(_, v)| v as usize > max);
    match bad {
        Some((index, value)) => Err(GfError::SymbolOutOfRange { index, value, max }),
        None => Ok(()),
    }
}

/// Encode table plus the generator it was built from.
#[derive(Clone, Debug)]
pub struct EncodeTable {
    generator: Generator,
    table: ParityTable,
    max: usize,
}

impl EncodeTable {
    #[inline] pub fn generator(&self) -> &Generator { &self.generator }
    #[inline] pub fn table(&self) -> &ParityTable { &self.table }
    #[inline] pub fn npar(&self) -> usize { self.table.npar }

    /// Systematic parity of `data` (highest degree first) into
    /// `parity[..npar]`, using an LFSR division by the generator.
    pub fn encode_parity<S: Symbol>(&self, data: &[S], parity: &mut [u16]) -> Result<(), GfError> {
        let npar = self.npar();
        if parity.len() < npar {
            return Err(GfError::BufferTooShort { name: "parity buffer", expected: npar, got: parity.len() });
        }
        ParityParams::new(npar).validate_codeword(self.max, data.len())?;
        check_symbols(data, self.max)?;
        let p = &mut parity[..npar];
        p.fill(0);
        for &s in data {
            let v: u16 = s.into();
            let fb = v ^ p[0];
            for i in 0..npar - 1 {
                p[i] = p[i + 1] ^ self.table.product(fb, i);
            }
            p[npar - 1] = self.table.product(fb, npar - 1);
        }
        Ok(())
    }

    /// `data` followed by its parity.
    pub fn encode<S: Symbol>(&self, data: &[S]) -> Result<Vec<u16>, GfError> {
        let mut out: Vec<u16> = data.iter().map(|&s| s.into()).collect();
        out.resize(data.len() + self.npar(), 0);
        let (head, parity) = out.split_at_mut(data.len());
        self.encode_parity(&*head, parity)?;
        Ok(out)
    }
}

/// Decode table: per-root products used for table-driven syndromes.
#[derive(Clone, Debug)]
pub struct DecodeTable {
    table: ParityTable,
    max: usize,
}

impl DecodeTable {
    #[inline] pub fn table(&self) -> &ParityTable { &self.table }
    #[inline] pub fn npar(&self) -> usize { self.table.npar }

    /// Syndromes of `data` into `syn[..npar]`; same result as
    /// [`Galois::calc_syndrome`]. Returns true if all are zero.
    pub fn syndromes<S: Symbol>(&self, data: &[S], syn: &mut [u16]) -> Result<bool, GfError> {
        let npar = self.npar();
        if syn.len() < npar {
            return Err(GfError::BufferTooShort { name: "syndrome buffer", expected: npar, got: syn.len() });
        }
        check_symbols(data, self.max)?;
        let syn = &mut syn[..npar];
        syn.fill(0);
        for &s in data {
            let v: u16 = s.into();
            for (i, wk) in syn.iter_mut().enumerate() {
                *wk = v ^ self.table.product(*wk, i);
            }
        }
        Ok(syn.iter().all(|&s| s == 0))
    }
}

impl Galois {
    pub fn make_encode_gx(&self, npar: usize) -> Result<Generator, GfError> {
        ParityParams::new(npar).validate(self)?;
        let _span = tracing::debug_span!("generator", npar, sym_start = self.sym_start()).entered();

        let mut gx = vec![0u16; npar];
        gx[npar - 1] = 1;
        for k in 0..npar {
            let root = self.pow_alpha(self.sym_start() + k);
            // multiply by (x + root), highest stored degree first
            for j in 0..npar - 1 {
                gx[j] = self.mul(gx[j], root) ^ gx[j + 1];
            }
            gx[npar - 1] = self.mul(gx[npar - 1], root);
        }
        Ok(Generator { coeffs: gx })
    }

    /// Generator in log form; a zero coefficient means the field or the root
    /// set is malformed.
    pub fn make_encode_gx_log(&self, npar: usize) -> Result<LogPoly, GfError> {
        self.generator_log(&self.make_encode_gx(npar)?)
    }

    fn generator_log(&self, gx: &Generator) -> Result<LogPoly, GfError> {
        gx.coeffs()
            .iter()
            .enumerate()
            .map(|(index, &c)| {
                if c == 0 {
                    Err(GfError::ZeroGeneratorCoefficient { index })
                } else {
                    Ok(self.to_log(c) as i32)
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(LogPoly::new)
    }

    /// `entry(b, half, i) = (b << 8*half) * gx[i]`.
    pub fn make_encode_table(&self, npar: usize) -> Result<EncodeTable, GfError> {
        let generator = self.make_encode_gx(npar)?;
        let loggx = self.generator_log(&generator)?;
        let _span = tracing::debug_span!("encode table", npar, width = self.width()).entered();
        let table = ParityTable::build(self, npar, |i| loggx[i] as usize);
        tracing::debug!(entries = table.entries.len(), "encode table built");
        Ok(EncodeTable { generator, table, max: self.max() })
    }

    /// `entry(b, half, i) = (b << 8*half) * α^(sym_start + i)`.
    pub fn make_decode_table(&self, npar: usize) -> Result<DecodeTable, GfError> {
        ParityParams::new(npar).validate(self)?;
        let _span = tracing::debug_span!("decode table", npar, width = self.width()).entered();
        let (start, max) = (self.sym_start(), self.max());
        let table = ParityTable::build(self, npar, |i| (start + i) % max);
        tracing::debug!(entries = table.entries.len(), "decode table built");
        Ok(DecodeTable { table, max })
    }
}
