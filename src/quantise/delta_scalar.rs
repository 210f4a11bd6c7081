use super::{codebook_at, LspIndices, UNIT_WEIGHTS};
use crate::common::{
    codebook::Codebooks,
    complex::Scaler,
    constants::{HZ_TO_RAD, RAD_TO_HZ},
    lsp::{check_order, LspError},
};

// LSPs 1..4 are sent as differences, the rest as one vector
const NUM_DELTAS: usize = 4;

/// Quantises the first four LSPs as successive differences (hz) and LSPs 5..10 with
/// the 6 dimensional JND vector codebook.
///
/// The differences are taken from the previously *quantised* LSP so quantisation
/// error does not accumulate up the vector.
pub fn lspd_quantise(
    codebooks: &Codebooks,
    lsp: &[Scaler],
    lsp_q: &mut [Scaler],
    order: usize,
) -> Result<LspIndices, LspError> {
    check_order(order, lsp.len())?;
    check_order(order, lsp_q.len())?;

    let mut lsp_hz = [0.0; NUM_DELTAS + 6];
    for (hz, lsp) in lsp_hz.iter_mut().zip(lsp) {
        *hz = *lsp * RAD_TO_HZ;
    }

    let mut indices = LspIndices::new();
    let mut se = 0.0;
    let mut prev_hz_q = 0.0;
    for (i, hz) in lsp_hz[..NUM_DELTAS].iter().enumerate() {
        let codebook = codebook_at(codebooks.lsp_delta, i)?;
        let dlsp = [*hz - prev_hz_q];
        let index = codebook.quantise(&dlsp, &UNIT_WEIGHTS[..1], &mut se)?;
        prev_hz_q += codebook.codeword_of_dim(index, 1)?[0];
        indices.push(index).ok();
    }

    let codebook = codebook_at(codebooks.lsp_jnd, NUM_DELTAS)?;
    let index = codebook.quantise(&lsp_hz[NUM_DELTAS..order], &UNIT_WEIGHTS[NUM_DELTAS..order], &mut se)?;
    indices.push(index).ok();

    lspd_dequantise(codebooks, &indices, lsp_q, order)?;
    Ok(indices)
}

/// Rebuilds LSPs 1..4 by summing the dequantised differences then looks up LSPs 5..10
pub fn lspd_dequantise(
    codebooks: &Codebooks,
    indices: &[usize],
    lsp_q: &mut [Scaler],
    order: usize,
) -> Result<(), LspError> {
    check_order(order, lsp_q.len())?;
    if indices.len() != NUM_DELTAS + 1 {
        return Err(LspError::IndexCountMismatch {
            expected: NUM_DELTAS + 1,
            actual: indices.len(),
        });
    }

    let mut lsp_hz_q = 0.0;
    for (i, index) in indices[..NUM_DELTAS].iter().enumerate() {
        let codebook = codebook_at(codebooks.lsp_delta, i)?;
        lsp_hz_q += codebook.codeword_of_dim(*index, 1)?[0];
        lsp_q[i] = lsp_hz_q * HZ_TO_RAD;
    }

    let codebook = codebook_at(codebooks.lsp_jnd, NUM_DELTAS)?;
    let codeword = codebook.codeword_of_dim(indices[NUM_DELTAS], order - NUM_DELTAS)?;
    for (lsp, hz) in lsp_q[NUM_DELTAS..order].iter_mut().zip(codeword) {
        *lsp = *hz * HZ_TO_RAD;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::constants::LPC_ORD;

    #[test]
    fn differences_are_closed_loop() {
        let codebooks = Codebooks::builtin();
        // 210, 290, 530, 680 hz
        let hz = [210.0, 290.0, 530.0, 680.0, 1000.0, 1300.0, 1600.0, 2000.0, 2400.0, 2800.0];
        let mut lsp = [0.0; LPC_ORD];
        for (lsp, hz) in lsp.iter_mut().zip(hz) {
            *lsp = hz * HZ_TO_RAD;
        }

        let mut lsp_q = [0.0; LPC_ORD];
        let indices = lspd_quantise(&codebooks, &lsp, &mut lsp_q, LPC_ORD).unwrap();

        // 210 -> 200, 290 - 200 = 90 -> 100, 530 - 300 = 230 -> 250, 680 - 550 = 130 -> 150
        assert_eq!(&indices[..4], &[7, 3, 4, 2]);
        let expected = [200.0, 300.0, 550.0, 700.0];
        for (lsp, hz) in lsp_q.iter().zip(expected) {
            assert!((lsp * RAD_TO_HZ - hz).abs() < 0.01, "{:?}", lsp_q);
        }
    }

    #[test]
    fn first_four_lsps_are_ascending() {
        let codebooks = Codebooks::builtin();
        let mut lsp_q = [0.0; LPC_ORD];

        lspd_dequantise(&codebooks, &[0, 0, 0, 0, 0], &mut lsp_q, LPC_ORD).unwrap();

        assert!(lsp_q[..4].windows(2).all(|w| w[1] > w[0]));
        assert!((lsp_q[3] * RAD_TO_HZ - 150.0).abs() < 0.01);
    }

    #[test]
    fn wrong_number_of_indices() {
        let codebooks = Codebooks::builtin();
        let mut lsp_q = [0.0; LPC_ORD];

        let result = lspd_dequantise(&codebooks, &[0, 0, 0, 0], &mut lsp_q, LPC_ORD);

        assert_eq!(result, Err(LspError::IndexCountMismatch { expected: 5, actual: 4 }));
    }
}
