use super::{codebook_at, LspIndices, UNIT_WEIGHTS};
use crate::common::{
    codebook::Codebooks,
    complex::Scaler,
    constants::{HZ_TO_RAD, LPC_ORD, RAD_TO_HZ},
    lsp::{check_order, LspError},
};

const NUM_SCALAR: usize = 4;

/// Perceptual weights for the vector quantised LSPs. Closely spaced LSPs mark a
/// sharp spectral peak so errors there are weighted more heavily.
pub fn lsp_spacing_weights(lsp: &[Scaler], weights: &mut [Scaler; LPC_ORD]) {
    *weights = UNIT_WEIGHTS;
    let last = LPC_ORD - 1;
    for i in NUM_SCALAR..last {
        weights[i] = 1.0 / (lsp[i] - lsp[i - 1]) + 1.0 / (lsp[i + 1] - lsp[i]);
    }
    weights[last] = 1.0 / (lsp[last] - lsp[last - 1]);
}

/// Scalar quantises LSPs 1..4 (hz) then vector quantises LSPs 5..10 (radians)
/// jointly using spacing weights.
pub fn lspvq_quantise(
    codebooks: &Codebooks,
    lsp: &[Scaler],
    lsp_q: &mut [Scaler],
    order: usize,
) -> Result<LspIndices, LspError> {
    check_order(order, lsp.len())?;

    let mut indices = LspIndices::new();
    let mut se = 0.0;
    for (i, lsp) in lsp[..NUM_SCALAR].iter().enumerate() {
        let lsp_hz = [*lsp * RAD_TO_HZ];
        let index = codebook_at(codebooks.lsp, i)?.quantise(&lsp_hz, &UNIT_WEIGHTS[..1], &mut se)?;
        indices.push(index).ok();
    }

    let mut weights = UNIT_WEIGHTS;
    lsp_spacing_weights(lsp, &mut weights);
    let index = codebooks
        .lsp_vq
        .quantise(&lsp[NUM_SCALAR..order], &weights[NUM_SCALAR..order], &mut se)?;
    indices.push(index).ok();

    lspvq_dequantise(codebooks, &indices, lsp_q, order)?;
    Ok(indices)
}

pub fn lspvq_dequantise(
    codebooks: &Codebooks,
    indices: &[usize],
    lsp_q: &mut [Scaler],
    order: usize,
) -> Result<(), LspError> {
    check_order(order, lsp_q.len())?;
    if indices.len() != NUM_SCALAR + 1 {
        return Err(LspError::IndexCountMismatch {
            expected: NUM_SCALAR + 1,
            actual: indices.len(),
        });
    }

    for (i, index) in indices[..NUM_SCALAR].iter().enumerate() {
        lsp_q[i] = codebook_at(codebooks.lsp, i)?.codeword_of_dim(*index, 1)?[0] * HZ_TO_RAD;
    }

    let codeword = codebooks.lsp_vq.codeword_of_dim(indices[NUM_SCALAR], order - NUM_SCALAR)?;
    lsp_q[NUM_SCALAR..order].copy_from_slice(codeword);

    Ok(())
}
