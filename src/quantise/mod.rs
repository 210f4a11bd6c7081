use crate::common::{
    codebook::{Codebook, Codebooks},
    complex::Scaler,
    constants::LPC_ORD,
    lsp::LspError,
};
use heapless::Vec;

pub mod delta_scalar;
pub mod delta_time;
pub mod full_vector;
pub mod jnd_vector;
pub mod scalar;
pub mod split_scalar;

/// Codebook indices describing the LSPs of one frame
pub type LspIndices = Vec<usize, LPC_ORD>;

/// Which LSP groups are updated by the delta-in-time quantiser. A group that is
/// not updated repeats the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTimeMode {
    /// LSPs 1..4 only
    Low,

    /// LSPs 5..10 only
    High,

    /// Both groups
    All,
}

impl DeltaTimeMode {
    pub fn updates_low(&self) -> bool {
        *self != DeltaTimeMode::High
    }

    pub fn updates_high(&self) -> bool {
        *self != DeltaTimeMode::Low
    }
}

/// The LSP quantiser used by a codec configuration. Decoding must use the same
/// scheme that produced the indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LspScheme {
    /// Independent scalar quantiser per LSP
    SplitScalar,

    /// Scalar quantised differences for LSPs 1..4, vector quantiser for LSPs 5..10
    DeltaScalar,

    /// Scalar quantisers for LSPs 1..4, spacing weighted vector quantiser for LSPs 5..10
    FullVector,

    /// Just noticeable difference scalar quantisers for LSPs 1..4, vector quantiser for LSPs 5..10
    Jnd,

    /// Vector quantised change since the previous frame
    DeltaTime(DeltaTimeMode),
}

impl LspScheme {
    /// Number of indices the scheme emits per frame
    pub fn num_indices(&self) -> usize {
        match self {
            Self::SplitScalar => LPC_ORD,
            Self::DeltaScalar | Self::FullVector | Self::Jnd => 5,
            Self::DeltaTime(DeltaTimeMode::All) => 2,
            Self::DeltaTime(_) => 1,
        }
    }

    /// Bit width of each index the scheme emits, in transmission order
    pub fn bits(&self, codebooks: &Codebooks) -> Vec<usize, LPC_ORD> {
        let mut bits = Vec::new();
        match self {
            Self::SplitScalar => {
                for i in 0..LPC_ORD {
                    bits.push(split_scalar::lsp_bits(codebooks, i)).ok();
                }
            }
            Self::DeltaScalar => {
                for codebook in codebooks.lsp_delta.iter().take(4) {
                    bits.push(codebook.log2m).ok();
                }
                bits.push(codebooks.lsp_jnd.get(4).map_or(0, |cb| cb.log2m)).ok();
            }
            Self::FullVector => {
                for codebook in codebooks.lsp.iter().take(4) {
                    bits.push(codebook.log2m).ok();
                }
                bits.push(codebooks.lsp_vq.log2m).ok();
            }
            Self::Jnd => {
                for codebook in codebooks.lsp_jnd.iter().take(5) {
                    bits.push(codebook.log2m).ok();
                }
            }
            Self::DeltaTime(mode) => {
                if mode.updates_low() {
                    bits.push(codebooks.lsp_dt.first().map_or(0, |cb| cb.log2m)).ok();
                }
                if mode.updates_high() {
                    bits.push(codebooks.lsp_dt.get(1).map_or(0, |cb| cb.log2m)).ok();
                }
            }
        }

        bits
    }

    /// Quantises `lsp` and writes the dequantised LSPs the decoder will see to `lsp_q`
    ///
    /// # Arguments
    ///
    /// * `codebooks` - Codebook tables
    /// * `lsp` - Unquantised LSPs (radians, ascending)
    /// * `prev` - Dequantised LSPs of the previous frame (only read by the delta-in-time scheme)
    /// * `lsp_q` - Dequantised LSPs (output)
    /// * `order` - LPC order
    pub fn quantise(
        &self,
        codebooks: &Codebooks,
        lsp: &[Scaler],
        prev: &[Scaler],
        lsp_q: &mut [Scaler],
        order: usize,
    ) -> Result<LspIndices, LspError> {
        match self {
            Self::SplitScalar => {
                let indices = split_scalar::encode_lsps(codebooks, lsp, order)?;
                split_scalar::decode_lsps(codebooks, &indices, lsp_q, order)?;
                Ok(indices)
            }
            Self::DeltaScalar => delta_scalar::lspd_quantise(codebooks, lsp, lsp_q, order),
            Self::FullVector => full_vector::lspvq_quantise(codebooks, lsp, lsp_q, order),
            Self::Jnd => jnd_vector::lspjnd_quantise(codebooks, lsp, lsp_q, order),
            Self::DeltaTime(mode) => delta_time::lspdt_quantise(codebooks, lsp, lsp_q, prev, *mode, order),
        }
    }

    /// Reconstructs the LSPs from the indices produced by `quantise`
    pub fn decode(
        &self,
        codebooks: &Codebooks,
        indices: &[usize],
        prev: &[Scaler],
        lsp_q: &mut [Scaler],
        order: usize,
    ) -> Result<(), LspError> {
        if indices.len() != self.num_indices() {
            return Err(LspError::IndexCountMismatch {
                expected: self.num_indices(),
                actual: indices.len(),
            });
        }

        match self {
            Self::SplitScalar => split_scalar::decode_lsps(codebooks, indices, lsp_q, order),
            Self::DeltaScalar => delta_scalar::lspd_dequantise(codebooks, indices, lsp_q, order),
            Self::FullVector => full_vector::lspvq_dequantise(codebooks, indices, lsp_q, order),
            Self::Jnd => jnd_vector::lspjnd_dequantise(codebooks, indices, lsp_q, order),
            Self::DeltaTime(mode) => delta_time::lspdt_dequantise(codebooks, indices, lsp_q, prev, *mode, order),
        }
    }
}

/// Unit weights for codebook searches that treat every component equally
pub(crate) const UNIT_WEIGHTS: [Scaler; LPC_ORD] = [1.0; LPC_ORD];

pub(crate) fn codebook_at(codebooks: &'static [Codebook], position: usize) -> Result<&'static Codebook, LspError> {
    codebooks.get(position).ok_or(LspError::MissingCodebook { position })
}
