use super::{
    codebook::CodebookError,
    complex::Scaler,
    constants::{HZ_TO_RAD, JND_STEPS_HZ, LPC_ORD, LSP_MIN_DIST, LSP_SWAP_MARGIN, RAD_TO_HZ},
};
#[allow(unused_imports)]
use num_traits::real::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LspError {
    UnsupportedOrder { expected: usize, actual: usize },
    IndexCountMismatch { expected: usize, actual: usize },
    MissingCodebook { position: usize },
    Codebook(CodebookError),
}

impl From<CodebookError> for LspError {
    fn from(err: CodebookError) -> Self {
        Self::Codebook(err)
    }
}

pub(crate) fn check_order(order: usize, lsp_len: usize) -> Result<(), LspError> {
    if order != LPC_ORD {
        return Err(LspError::UnsupportedOrder {
            expected: LPC_ORD,
            actual: order,
        });
    }
    if lsp_len < order {
        return Err(LspError::UnsupportedOrder {
            expected: order,
            actual: lsp_len,
        });
    }

    Ok(())
}

/// Swaps any adjacent LSPs that are out of order and pushes them apart so they
/// don't collide again. Returns the number of swaps made.
pub fn check_lsp_order(lsp: &mut [Scaler]) -> usize {
    let mut swaps = 0;
    for i in 1..lsp.len() {
        if lsp[i] < lsp[i - 1] {
            log::debug!("swapping lsp {} and {}", i - 1, i);
            let tmp = lsp[i - 1];
            lsp[i - 1] = lsp[i] - LSP_SWAP_MARGIN;
            lsp[i] = tmp + LSP_SWAP_MARGIN;
            swaps += 1;
        }
    }

    swaps
}

/// Nudges an LSP forward when it sits closer than `LSP_MIN_DIST` to its predecessor
pub fn force_min_lsp_dist(lsp: &mut [Scaler]) {
    for i in 1..lsp.len() {
        if lsp[i] - lsp[i - 1] < LSP_MIN_DIST {
            lsp[i] += LSP_MIN_DIST;
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExpansionBand {
    /// First LSP index (compared with its predecessor) covered by this band
    pub start: usize,

    /// Gaps narrower than this are widened (hz)
    pub min_sep_hz: Scaler,

    /// Width a narrow gap is widened to (hz)
    pub reset_sep_hz: Scaler,
}

/// Bandwidth expansion: keeps LSPs from getting too close together after
/// quantisation. Each band runs up to the start of the next one.
#[derive(Debug, Clone, Copy)]
pub struct BandwidthExpansion {
    pub bands: &'static [ExpansionBand],
}

impl BandwidthExpansion {
    /// Applied after dequantisation. Quantisation errors below 12.5 hz (25 hz steps)
    /// are inaudible so that is the scale of the low band. The coarser quantisers
    /// used for the higher LSPs need larger gaps to prevent twinkly noises.
    pub const DECODER: Self = Self {
        bands: &[
            ExpansionBand {
                start: 1,
                min_sep_hz: 25.0,
                reset_sep_hz: 50.0,
            },
            ExpansionBand {
                start: 4,
                min_sep_hz: 50.0,
                reset_sep_hz: 100.0,
            },
        ],
    };

    /// Applied when measuring how well an LPC model fits the harmonic amplitudes
    pub const MODEL: Self = Self {
        bands: &[
            ExpansionBand {
                start: 1,
                min_sep_hz: 12.5,
                reset_sep_hz: 12.5,
            },
            ExpansionBand {
                start: 5,
                min_sep_hz: 25.0,
                reset_sep_hz: 25.0,
            },
            ExpansionBand {
                start: 8,
                min_sep_hz: 75.0,
                reset_sep_hz: 75.0,
            },
        ],
    };

    fn band(&self, i: usize) -> Option<&ExpansionBand> {
        self.bands.iter().rev().find(|band| band.start <= i)
    }

    /// Minimum separation (radians) guaranteed between LSP `i` and LSP `i - 1`
    pub fn min_separation(&self, i: usize) -> Scaler {
        self.band(i).map_or(0.0, |band| band.min_sep_hz * HZ_TO_RAD)
    }

    pub fn apply(&self, lsp: &mut [Scaler]) {
        for i in 1..lsp.len() {
            if let Some(band) = self.band(i) {
                if lsp[i] - lsp[i - 1] < band.min_sep_hz * HZ_TO_RAD {
                    lsp[i] = lsp[i - 1] + band.reset_sep_hz * HZ_TO_RAD;
                }
            }
        }
    }
}

/// Applies decoder bandwidth expansion to a vector of dequantised LSPs
pub fn bw_expand_lsps(lsp: &mut [Scaler]) {
    BandwidthExpansion::DECODER.apply(lsp);
}

/// Moves each LSP to the nearest of a set of non-linear "just noticeable
/// difference" steps (25 hz for LSPs 1-2, 50 hz for 3-4, 100 hz above). An LSP
/// that lands on its predecessor is bumped up one step.
///
/// Can be used before quantisation to limit the quantiser input to a number of
/// discrete positions.
pub fn locate_lsps_jnd_steps(lsps: &mut [Scaler]) -> Result<(), LspError> {
    if lsps.len() != LPC_ORD {
        return Err(LspError::UnsupportedOrder {
            expected: LPC_ORD,
            actual: lsps.len(),
        });
    }

    for i in 0..LPC_ORD {
        let step = JND_STEPS_HZ[i];
        let lsp_hz = lsps[i] * RAD_TO_HZ;
        lsps[i] = (lsp_hz / step + 0.5).floor() * step * HZ_TO_RAD;

        if i > 0 && lsps[i] == lsps[i - 1] {
            lsps[i] += step * HZ_TO_RAD;
        }
    }

    Ok(())
}
