use crate::common::complex::Scaler;
use crate::tables::lsp_tables::{LSP_CB, LSP_CBD, LSP_CBDT, LSP_CBJND, LSP_CBVQ};
use itertools::izip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodebookError {
    EmptyCodebook,
    DimensionMismatch { expected: usize, actual: usize },
    IndexOutOfRange { index: usize, size: usize },
    PartialCodeword { k: usize, len: usize },
}

/// A fixed table of `m` codewords of dimension `k`, stored row by row
#[derive(Debug, Clone, Copy)]
pub struct Codebook {
    /// Dimension of each codeword
    pub k: usize,

    /// Number of codewords
    pub m: usize,

    /// Number of bits an index into this codebook consumes (ceil(log2(m)))
    pub log2m: usize,

    /// The codewords (length k * m)
    pub cb: &'static [Scaler],
}

impl Codebook {
    pub const fn new(k: usize, cb: &'static [Scaler]) -> Self {
        let m = if k == 0 { 0 } else { cb.len() / k };
        let log2m = if m <= 1 {
            0
        } else {
            (usize::BITS - (m - 1).leading_zeros()) as usize
        };

        Self { k, m, log2m, cb }
    }

    /// Builds a codebook from a table that must hold a whole number of codewords
    pub fn try_new(k: usize, cb: &'static [Scaler]) -> Result<Self, CodebookError> {
        if k == 0 || cb.is_empty() {
            return Err(CodebookError::EmptyCodebook);
        }

        let codebook = Self::new(k, cb);
        codebook.check_table()?;
        Ok(codebook)
    }

    fn check_table(&self) -> Result<(), CodebookError> {
        if self.cb.len() != self.k * self.m {
            return Err(CodebookError::PartialCodeword {
                k: self.k,
                len: self.cb.len(),
            });
        }

        Ok(())
    }

    /// Returns the codeword at `index`
    pub fn codeword(&self, index: usize) -> Result<&'static [Scaler], CodebookError> {
        self.check_table()?;
        if index >= self.m {
            return Err(CodebookError::IndexOutOfRange { index, size: self.m });
        }

        let cb = self.cb;
        Ok(&cb[index * self.k..(index + 1) * self.k])
    }

    /// Returns the codeword at `index` of a codebook that must have dimension `k`
    pub fn codeword_of_dim(&self, index: usize, k: usize) -> Result<&'static [Scaler], CodebookError> {
        if self.k != k {
            return Err(CodebookError::DimensionMismatch {
                expected: k,
                actual: self.k,
            });
        }

        self.codeword(index)
    }

    /// Quantises `vec` by choosing the nearest codeword and returns its index. The
    /// weighted squared error of the chosen codeword is added to `se`.
    ///
    /// The search is exhaustive and the first codeword achieving the minimum wins.
    ///
    /// # Arguments
    ///
    /// * `vec` - Vector to quantise (length k)
    /// * `weights` - Perceptual weight of each component (length k)
    /// * `se` - Accumulated squared error, used for distortion diagnostics only
    pub fn quantise(&self, vec: &[Scaler], weights: &[Scaler], se: &mut Scaler) -> Result<usize, CodebookError> {
        if self.m == 0 || self.k == 0 {
            return Err(CodebookError::EmptyCodebook);
        }
        self.check_table()?;
        if vec.len() != self.k {
            return Err(CodebookError::DimensionMismatch {
                expected: self.k,
                actual: vec.len(),
            });
        }
        if weights.len() != self.k {
            return Err(CodebookError::DimensionMismatch {
                expected: self.k,
                actual: weights.len(),
            });
        }

        let mut best_index = 0;
        let mut best_error = Scaler::MAX;
        for (j, codeword) in self.cb.chunks_exact(self.k).take(self.m).enumerate() {
            let mut e = 0.0;
            for (c, v, w) in izip!(codeword, vec, weights) {
                let diff = (*c - *v) * *w;
                e += diff * diff;
            }

            if e < best_error {
                best_error = e;
                best_index = j;
            }
        }

        *se += best_error;
        Ok(best_index)
    }
}

/// The codebooks used by the LSP quantisers. Built once and shared read only by
/// every frame.
#[derive(Debug, Clone, Copy)]
pub struct Codebooks {
    /// One scalar codebook per LSP (hz)
    pub lsp: &'static [Codebook],

    /// Scalar codebooks for the differences between LSPs 1..4 (hz)
    pub lsp_delta: &'static [Codebook],

    /// Scalar codebooks for LSPs 1..4 then a vector codebook for LSPs 5..10 (hz)
    pub lsp_jnd: &'static [Codebook],

    /// Vector codebook for LSPs 5..10 (radians)
    pub lsp_vq: &'static Codebook,

    /// Frame to frame change of LSPs 1..4 and LSPs 5..10 (hz)
    pub lsp_dt: &'static [Codebook],
}

impl Codebooks {
    pub fn builtin() -> Self {
        Self {
            lsp: &LSP_CB,
            lsp_delta: &LSP_CBD,
            lsp_jnd: &LSP_CBJND,
            lsp_vq: &LSP_CBVQ,
            lsp_dt: &LSP_CBDT,
        }
    }
}

impl Default for Codebooks {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    static GRID: [Scaler; 8] = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
    static TWINS: [Scaler; 6] = [5.0, 1.0, 2.0, 1.0, 2.0, 1.0];

    #[test]
    fn bits_per_index() {
        assert_eq!(Codebook::new(1, &GRID).log2m, 3);
        assert_eq!(Codebook::new(2, &GRID).log2m, 2);
        assert_eq!(Codebook::new(2, &TWINS).log2m, 2);
        assert_eq!(Codebook::new(8, &GRID).log2m, 0);
    }

    #[test]
    fn nearest_codeword() {
        let codebook = Codebook::new(2, &GRID);
        let mut se = 0.0;

        let index = codebook.quantise(&[2.2, 1.9], &[1.0, 1.0], &mut se).unwrap();

        assert_eq!(index, 2);
        assert!((se - 0.05).abs() < 1e-6);
    }

    #[test]
    fn weights_change_the_winner() {
        static CB: [Scaler; 4] = [0.0, 0.0, 1.0, 1.0];
        let codebook = Codebook::new(2, &CB);
        let mut se = 0.0;

        // equidistant without weights, the heavily weighted component decides
        let index = codebook.quantise(&[0.2, 0.8], &[1.0, 10.0], &mut se).unwrap();
        assert_eq!(index, 1);
        let index = codebook.quantise(&[0.2, 0.8], &[10.0, 1.0], &mut se).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn repeated_search_is_deterministic() {
        let codebook = Codebook::new(2, &GRID);
        let mut se_a = 0.0;
        let mut se_b = 0.0;

        let a = codebook.quantise(&[1.3, 0.2], &[0.5, 2.0], &mut se_a).unwrap();
        let b = codebook.quantise(&[1.3, 0.2], &[0.5, 2.0], &mut se_b).unwrap();

        assert_eq!(a, b);
        assert_eq!(se_a, se_b);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let codebook = Codebook::new(2, &TWINS);
        let mut se = 0.0;

        let index = codebook.quantise(&[2.0, 1.0], &[1.0, 1.0], &mut se).unwrap();

        assert_eq!(index, 1);
        assert_eq!(se, 0.0);
    }

    #[test]
    fn empty_codebook_is_an_error() {
        static EMPTY: [Scaler; 0] = [];
        let codebook = Codebook::new(1, &EMPTY);
        let mut se = 0.0;

        let result = codebook.quantise(&[1.0], &[1.0], &mut se);

        assert_eq!(result, Err(CodebookError::EmptyCodebook));
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let codebook = Codebook::new(2, &GRID);
        let mut se = 0.0;

        let result = codebook.quantise(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], &mut se);

        assert_eq!(result, Err(CodebookError::DimensionMismatch { expected: 2, actual: 3 }));
    }

    #[test]
    fn codeword_lookup() {
        let codebook = Codebook::new(2, &GRID);

        assert_eq!(codebook.codeword(3).unwrap(), &[3.0, 3.0]);
        assert_eq!(
            codebook.codeword(4),
            Err(CodebookError::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn codeword_dimension_is_checked() {
        let codebook = Codebook::new(2, &GRID);

        assert_eq!(codebook.codeword_of_dim(1, 2).unwrap(), &[1.0, 1.0]);
        assert_eq!(
            codebook.codeword_of_dim(1, 6),
            Err(CodebookError::DimensionMismatch { expected: 6, actual: 2 })
        );
    }

    #[test]
    fn partial_codeword_is_rejected() {
        static SEVEN: [Scaler; 7] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut se = 0.0;

        assert_eq!(
            Codebook::try_new(2, &SEVEN).err(),
            Some(CodebookError::PartialCodeword { k: 2, len: 7 })
        );
        assert_eq!(Codebook::try_new(0, &SEVEN).err(), Some(CodebookError::EmptyCodebook));
        assert!(Codebook::try_new(1, &SEVEN).is_ok());

        // a table built unchecked still refuses to drop its last entry
        let codebook = Codebook::new(2, &SEVEN);
        assert_eq!(codebook.m, 3);
        assert_eq!(
            codebook.codeword(0),
            Err(CodebookError::PartialCodeword { k: 2, len: 7 })
        );
        assert_eq!(
            codebook.quantise(&[6.0, 6.0], &[1.0, 1.0], &mut se),
            Err(CodebookError::PartialCodeword { k: 2, len: 7 })
        );
    }
}
