use super::{
    complex::Scaler,
    config::CodecConfig,
    constants::{LPC_ORD, MAX_AMP},
};
use core::f32::consts::PI;
#[allow(unused_imports)]
use num_traits::real::Real;

/// Harmonic sinusoidal model parameters for one frame
#[derive(Debug, Clone, Copy)]
pub struct SinusoidalModel {
    /// Fundamental frequency (radians per sample)
    pub wo: Scaler,

    /// Number of harmonics below half the sample rate
    pub l: usize,

    /// Harmonic amplitudes, indexed 1..=l (index 0 is unused)
    pub amplitudes: [Scaler; MAX_AMP + 1],
}

impl SinusoidalModel {
    pub fn new(wo: Scaler) -> Self {
        Self {
            wo,
            l: Self::num_harmonics(wo),
            amplitudes: [0.0; MAX_AMP + 1],
        }
    }

    /// Sets Wo and recomputes the number of harmonics
    pub fn set_wo(&mut self, wo: Scaler) {
        self.wo = wo;
        self.l = Self::num_harmonics(wo);
    }

    fn num_harmonics(wo: Scaler) -> usize {
        if wo <= 0.0 {
            return 0;
        }

        ((PI / wo).floor() as usize).min(MAX_AMP)
    }
}

/// Dequantised LSPs and Wo of the previous frame. The caller carries this from one
/// frame to the next, encoder and decoder each keep their own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHistory {
    pub lsps: [Scaler; LPC_ORD],
    pub wo: Scaler,
}

impl FrameHistory {
    /// Evenly spaced LSPs and the lowest Wo, used before the first frame
    pub fn new(config: &CodecConfig) -> Self {
        let mut lsps = [0.0; LPC_ORD];
        for (i, lsp) in lsps.iter_mut().enumerate() {
            *lsp = (i + 1) as Scaler * PI / (LPC_ORD + 1) as Scaler;
        }

        Self {
            lsps,
            wo: config.wo_min(),
        }
    }
}

impl Default for FrameHistory {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn harmonic_count_follows_wo() {
        let mut model = SinusoidalModel::new(2.0 * PI / 101.0);
        assert_eq!(model.l, 50);

        model.set_wo(2.0 * PI / 21.0);
        assert_eq!(model.l, 10);

        // clamped to the size of the amplitude array
        model.set_wo(2.0 * PI / 400.0);
        assert_eq!(model.l, MAX_AMP);

        model.set_wo(0.0);
        assert_eq!(model.l, 0);
    }

    #[test]
    fn initial_history_is_ordered() {
        let history = FrameHistory::default();

        assert!(history.lsps.windows(2).all(|w| w[1] > w[0]));
        assert!(history.lsps[0] > 0.0 && history.lsps[LPC_ORD - 1] < PI);
        assert_eq!(history.wo, CodecConfig::default().wo_min());
    }
}
