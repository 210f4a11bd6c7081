use super::{codebook_at, LspIndices, UNIT_WEIGHTS};
use crate::common::{
    codebook::Codebooks,
    complex::Scaler,
    constants::{HZ_TO_RAD, RAD_TO_HZ},
    lsp::{check_order, LspError},
};

/// Number of bits needed to send the index of LSP `i`
pub fn lsp_bits(codebooks: &Codebooks, i: usize) -> usize {
    codebooks.lsp.get(i).map_or(0, |codebook| codebook.log2m)
}

/// Finds the index of each LSP in its own scalar codebook. LSPs are quantised in hz.
pub fn encode_lsps(codebooks: &Codebooks, lsp: &[Scaler], order: usize) -> Result<LspIndices, LspError> {
    check_order(order, lsp.len())?;

    let mut indices = LspIndices::new();
    let mut se = 0.0;
    for (i, lsp) in lsp[..order].iter().enumerate() {
        let codebook = codebook_at(codebooks.lsp, i)?;
        let lsp_hz = [*lsp * RAD_TO_HZ];
        let index = codebook.quantise(&lsp_hz, &UNIT_WEIGHTS[..1], &mut se)?;
        indices.push(index).ok();
    }

    Ok(indices)
}

/// Looks up each index and converts back to radians
pub fn decode_lsps(codebooks: &Codebooks, indices: &[usize], lsp: &mut [Scaler], order: usize) -> Result<(), LspError> {
    check_order(order, lsp.len())?;
    if indices.len() != order {
        return Err(LspError::IndexCountMismatch {
            expected: order,
            actual: indices.len(),
        });
    }

    for (i, (lsp, index)) in lsp[..order].iter_mut().zip(indices).enumerate() {
        let codebook = codebook_at(codebooks.lsp, i)?;
        *lsp = codebook.codeword_of_dim(*index, 1)?[0] * HZ_TO_RAD;
    }

    Ok(())
}
