use crate::gf::{Galois, Symbol};

impl Galois {
    /// Evaluates `data` (highest degree first) at α^(sym_start + i) for every
    /// `i` in `0..syn.len()`, by Horner's rule. Returns true if every syndrome
    /// is zero.
    ///
    /// Every symbol must be a field element (at most `max`). This is only
    /// asserted in debug builds; [`DecodeTable::syndromes`](crate::DecodeTable::syndromes)
    /// checks its input and returns an error instead.
    pub fn calc_syndrome<S: Symbol>(&self, data: &[S], syn: &mut [u16]) -> bool {
        let mut has_err = 0u16;
        for (i, out) in syn.iter_mut().enumerate() {
            let root = (self.sym_start() + i) % self.max();
            let mut wk = 0u16;
            for &s in data {
                let v: u16 = s.into();
                debug_assert!(v as usize <= self.max(), "symbol {v:#x} outside the field");
                // wk = data + wk * α^root
                wk = v ^ if wk == 0 { 0 } else { self.to_exp(self.to_log(wk) + root) };
            }
            *out = wk;
            has_err |= wk;
        }
        let all_zero = has_err == 0;
        tracing::trace!(len = data.len(), njar = syn.len(), all_zero, "syndromes");
        all_zero
    }

    /// `njar` syndromes of `data` and whether they are all zero.
    pub fn syndromes<S: Symbol>(&self, data: &[S], njar: usize) -> (Vec<u16>, bool) {
        let mut syn = vec![0u16; njar];
        let ok = self.calc_syndrome(data, &mut syn);
        (syn, ok)
    }
}
