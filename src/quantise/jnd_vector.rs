use super::{codebook_at, LspIndices, UNIT_WEIGHTS};
use crate::common::{
    codebook::Codebooks,
    complex::Scaler,
    constants::{HZ_TO_RAD, LPC_ORD, RAD_TO_HZ},
    lsp::{check_order, LspError},
};

const NUM_SCALAR: usize = 4;

/// Quantises LSPs 1..4 against JND spaced scalar codebooks and LSPs 5..10 against
/// a JND spaced vector codebook. Everything is done in hz with unit weights.
pub fn lspjnd_quantise(
    codebooks: &Codebooks,
    lsp: &[Scaler],
    lsp_q: &mut [Scaler],
    order: usize,
) -> Result<LspIndices, LspError> {
    check_order(order, lsp.len())?;

    let mut lsp_hz = [0.0; LPC_ORD];
    for (hz, lsp) in lsp_hz.iter_mut().zip(lsp) {
        *hz = *lsp * RAD_TO_HZ;
    }

    let mut indices = LspIndices::new();
    let mut se = 0.0;
    for i in 0..NUM_SCALAR {
        let index = codebook_at(codebooks.lsp_jnd, i)?.quantise(&lsp_hz[i..i + 1], &UNIT_WEIGHTS[..1], &mut se)?;
        indices.push(index).ok();
    }

    let index = codebook_at(codebooks.lsp_jnd, NUM_SCALAR)?.quantise(
        &lsp_hz[NUM_SCALAR..order],
        &UNIT_WEIGHTS[NUM_SCALAR..order],
        &mut se,
    )?;
    indices.push(index).ok();

    lspjnd_dequantise(codebooks, &indices, lsp_q, order)?;
    Ok(indices)
}

pub fn lspjnd_dequantise(
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
        lsp_q[i] = codebook_at(codebooks.lsp_jnd, i)?.codeword_of_dim(*index, 1)?[0] * HZ_TO_RAD;
    }

    let codebook = codebook_at(codebooks.lsp_jnd, NUM_SCALAR)?;
    let codeword = codebook.codeword_of_dim(indices[NUM_SCALAR], order - NUM_SCALAR)?;
    for (lsp, hz) in lsp_q[NUM_SCALAR..order].iter_mut().zip(codeword) {
        *lsp = *hz * HZ_TO_RAD;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::lsp::locate_lsps_jnd_steps;

    #[test]
    fn scalar_part_lands_on_jnd_steps() {
        let codebooks = Codebooks::builtin();
        let mut lsp = [0.16, 0.33, 0.52, 0.74, 1.0, 1.3, 1.6, 1.9, 2.2, 2.5];
        let mut lsp_q = [0.0; LPC_ORD];

        let indices = lspjnd_quantise(&codebooks, &lsp, &mut lsp_q, LPC_ORD).unwrap();
        locate_lsps_jnd_steps(&mut lsp).unwrap();

        // inside the codebook range the scalar quantisers agree with the JND grid
        for i in 0..4 {
            assert!((lsp_q[i] - lsp[i]).abs() < 1e-4, "{}: {:?} {:?}", i, lsp_q, lsp);
        }
        assert_eq!(indices.len(), 5);
    }

    #[test]
    fn dequantise_matches_quantise() {
        let codebooks = Codebooks::builtin();
        let lsp = [0.18, 0.35, 0.62, 0.81, 1.12, 1.52, 1.83, 2.2, 2.55, 2.8];
        let mut lsp_q = [0.0; LPC_ORD];
        let mut decoded = [0.0; LPC_ORD];

        let indices = lspjnd_quantise(&codebooks, &lsp, &mut lsp_q, LPC_ORD).unwrap();
        lspjnd_dequantise(&codebooks, &indices, &mut decoded, LPC_ORD).unwrap();

        assert_eq!(lsp_q, decoded);
    }
}
