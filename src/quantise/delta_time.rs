use super::{codebook_at, DeltaTimeMode, LspIndices, UNIT_WEIGHTS};
use crate::common::{
    codebook::Codebooks,
    complex::Scaler,
    constants::{HZ_TO_RAD, LPC_ORD, RAD_TO_HZ},
    lsp::{check_order, LspError},
};

// LSPs 1..4 form the low group, LSPs 5..10 the high group
const SPLIT: usize = 4;

/// Quantises the change of each LSP since the previous frame (hz) with one vector
/// codebook per group. A group left out by `mode` repeats the previous frame.
///
/// # Arguments
///
/// * `lsp` - Unquantised LSPs for this frame
/// * `lsp_q` - Dequantised LSPs (output)
/// * `prev` - Dequantised LSPs of the previous frame. Keeping this up to date is the
///   caller's job so frames can be skipped when running at a lower frame rate.
/// * `mode` - Which groups to update
pub fn lspdt_quantise(
    codebooks: &Codebooks,
    lsp: &[Scaler],
    lsp_q: &mut [Scaler],
    prev: &[Scaler],
    mode: DeltaTimeMode,
    order: usize,
) -> Result<LspIndices, LspError> {
    check_order(order, lsp.len())?;
    check_order(order, prev.len())?;

    let mut lsp_dt = [0.0; LPC_ORD];
    for (dt, (lsp, prev)) in lsp_dt.iter_mut().zip(lsp.iter().zip(prev)) {
        *dt = RAD_TO_HZ * (*lsp - *prev);
    }

    let mut indices = LspIndices::new();
    let mut se = 0.0;
    if mode.updates_low() {
        let codebook = codebook_at(codebooks.lsp_dt, 0)?;
        let index = codebook.quantise(&lsp_dt[..SPLIT], &UNIT_WEIGHTS[..SPLIT], &mut se)?;
        indices.push(index).ok();
    }
    if mode.updates_high() {
        let codebook = codebook_at(codebooks.lsp_dt, 1)?;
        let index = codebook.quantise(&lsp_dt[SPLIT..order], &UNIT_WEIGHTS[SPLIT..order], &mut se)?;
        indices.push(index).ok();
    }

    lspdt_dequantise(codebooks, &indices, lsp_q, prev, mode, order)?;
    Ok(indices)
}

/// Adds the dequantised changes back onto the previous frame's LSPs
pub fn lspdt_dequantise(
    codebooks: &Codebooks,
    indices: &[usize],
    lsp_q: &mut [Scaler],
    prev: &[Scaler],
    mode: DeltaTimeMode,
    order: usize,
) -> Result<(), LspError> {
    check_order(order, lsp_q.len())?;
    check_order(order, prev.len())?;
    let expected = mode.updates_low() as usize + mode.updates_high() as usize;
    if indices.len() != expected {
        return Err(LspError::IndexCountMismatch {
            expected,
            actual: indices.len(),
        });
    }

    lsp_q[..order].copy_from_slice(&prev[..order]);

    let mut indices = indices.iter();
    if mode.updates_low() {
        if let Some(index) = indices.next() {
            let codeword = codebook_at(codebooks.lsp_dt, 0)?.codeword_of_dim(*index, SPLIT)?;
            for (lsp, dt) in lsp_q[..SPLIT].iter_mut().zip(codeword) {
                *lsp += HZ_TO_RAD * *dt;
            }
        }
    }
    if mode.updates_high() {
        if let Some(index) = indices.next() {
            let codeword = codebook_at(codebooks.lsp_dt, 1)?.codeword_of_dim(*index, order - SPLIT)?;
            for (lsp, dt) in lsp_q[SPLIT..order].iter_mut().zip(codeword) {
                *lsp += HZ_TO_RAD * *dt;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    const PREV: [Scaler; LPC_ORD] = [0.15, 0.32, 0.55, 0.75, 1.05, 1.4, 1.7, 2.0, 2.3, 2.6];

    #[test]
    fn no_change_selects_the_zero_codeword() {
        let codebooks = Codebooks::builtin();
        let mut lsp_q = [0.0; LPC_ORD];

        let indices =
            lspdt_quantise(&codebooks, &PREV, &mut lsp_q, &PREV, DeltaTimeMode::All, LPC_ORD).unwrap();

        assert_eq!(indices.as_slice(), &[0, 0]);
        assert_eq!(lsp_q, PREV);
    }

    #[test]
    fn low_mode_copies_the_high_group() {
        let codebooks = Codebooks::builtin();
        let lsp = [0.2, 0.35, 0.6, 0.8, 1.2, 1.5, 1.9, 2.1, 2.5, 2.7];
        let mut lsp_q = [0.0; LPC_ORD];

        let indices = lspdt_quantise(&codebooks, &lsp, &mut lsp_q, &PREV, DeltaTimeMode::Low, LPC_ORD).unwrap();

        assert_eq!(indices.len(), 1);
        assert_eq!(&lsp_q[SPLIT..], &PREV[SPLIT..]);
    }

    #[test]
    fn high_mode_copies_the_low_group() {
        let codebooks = Codebooks::builtin();
        let lsp = [0.2, 0.35, 0.6, 0.8, 1.2, 1.5, 1.9, 2.1, 2.5, 2.7];
        let mut lsp_q = [0.0; LPC_ORD];

        let indices = lspdt_quantise(&codebooks, &lsp, &mut lsp_q, &PREV, DeltaTimeMode::High, LPC_ORD).unwrap();

        assert_eq!(indices.len(), 1);
        assert_eq!(&lsp_q[..SPLIT], &PREV[..SPLIT]);
    }

    #[test]
    fn decoded_change_follows_the_codeword() {
        let codebooks = Codebooks::builtin();
        let mut lsp_q = [0.0; LPC_ORD];

        lspdt_dequantise(&codebooks, &[3, 5], &mut lsp_q, &PREV, DeltaTimeMode::All, LPC_ORD).unwrap();

        let low = codebooks.lsp_dt[0].codeword(3).unwrap();
        let high = codebooks.lsp_dt[1].codeword(5).unwrap();
        for i in 0..LPC_ORD {
            let dt = if i < SPLIT { low[i] } else { high[i - SPLIT] };
            assert!(((lsp_q[i] - PREV[i]) * RAD_TO_HZ - dt).abs() < 0.01);
        }
    }

    #[test]
    fn previous_frame_is_required() {
        let codebooks = Codebooks::builtin();
        let mut lsp_q = [0.0; LPC_ORD];

        let result = lspdt_quantise(&codebooks, &PREV, &mut lsp_q, &[], DeltaTimeMode::All, LPC_ORD);

        assert_eq!(result, Err(LspError::UnsupportedOrder { expected: 10, actual: 0 }));
    }
}
