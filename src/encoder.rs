// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");

use crate::{
    amplitude::AmplitudeReconstructor,
    common::{
        codebook::Codebooks,
        complex::Scaler,
        config::{CodecConfig, PitchCoding},
        constants::{LPC_ORD, LSP_DELTA1, LSP_ROOT_BISECTIONS, MAX_WINDOW},
        lsp::{check_lsp_order, check_order, BandwidthExpansion, LspError},
        model::{FrameHistory, SinusoidalModel},
    },
    lpc::{autocorrelate, levinson_durbin, lpc_to_lsp, lsp_to_lpc},
    quantise::{
        scalar::{EnergyQuantiser, PitchQuantiser},
        LspIndices,
    },
    transform::{SparseDft, SpectralTransform, TransformError},
};
use core::f32::consts::PI;
use itertools::izip;
#[allow(unused_imports)]
use num_traits::real::Real;

#[derive(Debug)]
pub enum EncodeError {
    FrameLengthMismatch { expected: usize, actual: usize },
    UnsupportedWindow { max: usize, actual: usize },
    Lsp(LspError),
    Transform(TransformError),
}

impl From<LspError> for EncodeError {
    fn from(err: LspError) -> Self {
        Self::Lsp(err)
    }
}

impl From<TransformError> for EncodeError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}

/// All the indices sent for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameIndices {
    pub lsp: LspIndices,
    pub energy: usize,
    pub wo: usize,
}

#[derive(Debug, Clone)]
pub struct EncodedFrame {
    pub indices: FrameIndices,

    /// What the decoder will reconstruct, carry this into the next frame
    pub history: FrameHistory,
}

/// LPC model of one windowed frame
#[derive(Debug, Clone, Copy)]
pub struct LpcAnalysis {
    /// Unquantised LSPs (radians)
    pub lsps: [Scaler; LPC_ORD],

    /// LPC coefficients, ak[0] = 1
    pub ak: [Scaler; LPC_ORD + 1],

    /// Prediction error energy
    pub energy: Scaler,

    /// False when the LSP root search failed and benign LSPs were substituted
    pub roots_found: bool,
}

/// How the LPC model is conditioned before measuring its fit to the harmonic amplitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpcModelling {
    /// LPC coefficients straight from the analysis
    Direct,

    /// Round trip through LSPs with bandwidth expansion
    Expanded,

    /// As `Expanded` with the LSPs quantised by the configured scheme first
    Quantised,
}

pub struct Encoder<T: SpectralTransform = SparseDft> {
    config: CodecConfig,
    codebooks: Codebooks,
    pitch: PitchQuantiser,
    energy: EnergyQuantiser,
    amplitudes: AmplitudeReconstructor<T>,
}

impl Encoder<SparseDft> {
    pub fn new(config: CodecConfig, codebooks: Codebooks) -> Result<Self, EncodeError> {
        let transform = SparseDft::new(config.fft_size)?;
        Self::with_transform(config, codebooks, transform)
    }
}

impl<T: SpectralTransform> Encoder<T> {
    pub fn with_transform(config: CodecConfig, codebooks: Codebooks, transform: T) -> Result<Self, EncodeError> {
        check_order(config.order, LPC_ORD)?;
        if config.m > MAX_WINDOW {
            return Err(EncodeError::UnsupportedWindow {
                max: MAX_WINDOW,
                actual: config.m,
            });
        }

        Ok(Self {
            config,
            codebooks,
            pitch: PitchQuantiser::new(&config),
            energy: EnergyQuantiser::new(&config),
            amplitudes: AmplitudeReconstructor::new(transform)?,
        })
    }

    /// Windows the frame, fits an LPC model and converts it to LSPs. If the root
    /// search does not find every LSP an evenly spaced vector is used instead so the
    /// frame can still be sent.
    ///
    /// # Arguments
    ///
    /// * `samples` - Time domain speech (config.m samples)
    /// * `window` - Analysis window (config.m samples)
    pub fn speech_to_uq_lsps(&self, samples: &[Scaler], window: &[Scaler]) -> Result<LpcAnalysis, EncodeError> {
        let m = self.config.m;
        for len in [samples.len(), window.len()] {
            if len != m {
                return Err(EncodeError::FrameLengthMismatch {
                    expected: m,
                    actual: len,
                });
            }
        }

        let mut wn = [0.0; MAX_WINDOW];
        for (wn, sample, w) in izip!(wn[..m].iter_mut(), samples, window) {
            *wn = *sample * *w;
        }

        let mut r = [0.0; LPC_ORD + 1];
        autocorrelate(&wn[..m], &mut r);
        let mut ak = [0.0; LPC_ORD + 1];
        levinson_durbin(&r, &mut ak);

        let mut energy = 0.0;
        for (a, r) in ak.iter().zip(&r) {
            energy += *a * *r;
        }

        let mut lsps = [0.0; LPC_ORD];
        let roots = lpc_to_lsp(&ak, &mut lsps, LSP_ROOT_BISECTIONS, LSP_DELTA1);
        let roots_found = roots == LPC_ORD;
        if !roots_found {
            log::warn!("found {} of {} lsp roots, using benign lsps", roots, LPC_ORD);
            for (i, lsp) in lsps.iter_mut().enumerate() {
                *lsp = (PI / LPC_ORD as Scaler) * i as Scaler;
            }
        }

        Ok(LpcAnalysis {
            lsps,
            ak,
            energy,
            roots_found,
        })
    }

    /// Quantises the LSPs and energy of a frame
    pub fn encode_amplitudes(
        &self,
        samples: &[Scaler],
        window: &[Scaler],
        history: &FrameHistory,
    ) -> Result<(LspIndices, usize, [Scaler; LPC_ORD]), EncodeError> {
        let analysis = self.speech_to_uq_lsps(samples, window)?;

        let mut lsps_q = [0.0; LPC_ORD];
        let lsp_indices = self.config.lsp_scheme.quantise(
            &self.codebooks,
            &analysis.lsps,
            &history.lsps,
            &mut lsps_q,
            self.config.order,
        )?;
        let energy_index = self.energy.encode(analysis.energy);

        Ok((lsp_indices, energy_index, lsps_q))
    }

    /// Encodes one frame: LSPs, energy and the fundamental `wo`
    pub fn encode(
        &self,
        samples: &[Scaler],
        window: &[Scaler],
        wo: Scaler,
        history: &FrameHistory,
    ) -> Result<EncodedFrame, EncodeError> {
        let (lsp, energy, lsps_q) = self.encode_amplitudes(samples, window, history)?;

        let (wo_index, wo_q) = match self.config.pitch_coding {
            PitchCoding::Absolute => {
                let index = self.pitch.encode(wo);
                (index, self.pitch.decode(index))
            }
            PitchCoding::Delta => {
                let index = self.pitch.encode_dt(wo, history.wo);
                (index, self.pitch.decode_dt(index, history.wo))
            }
        };

        log::trace!("lsp {:?} energy {} wo {}", lsp, energy, wo_index);

        Ok(EncodedFrame {
            indices: FrameIndices {
                lsp,
                energy,
                wo: wo_index,
            },
            history: FrameHistory {
                lsps: lsps_q,
                wo: wo_q,
            },
        })
    }

    /// Measures how well the LPC model of a frame fits the harmonic amplitudes in
    /// `model`, which are replaced with the LPC amplitudes. Returns the SNR (dB) and
    /// the LPC coefficients used.
    pub fn lpc_model_amplitudes(
        &mut self,
        samples: &[Scaler],
        window: &[Scaler],
        model: &mut SinusoidalModel,
        modelling: LpcModelling,
        history: &FrameHistory,
    ) -> Result<(Scaler, [Scaler; LPC_ORD + 1]), EncodeError> {
        let mut analysis = self.speech_to_uq_lsps(samples, window)?;

        if modelling != LpcModelling::Direct {
            let mut lsps = analysis.lsps;
            if modelling == LpcModelling::Quantised {
                self.config.lsp_scheme.quantise(
                    &self.codebooks,
                    &analysis.lsps,
                    &history.lsps,
                    &mut lsps,
                    self.config.order,
                )?;
                check_lsp_order(&mut lsps);
            }

            BandwidthExpansion::MODEL.apply(&mut lsps);
            lsp_to_lpc(&lsps, &mut analysis.ak);
        }

        let snr = self.amplitudes.aks_to_m2(&analysis.ak, model, analysis.energy);
        Ok((snr, analysis.ak))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    extern crate std;
    use super::*;
    use crate::quantise::{DeltaTimeMode, LspScheme};

    pub(crate) const M: usize = 320;

    /// Noise through a two pole resonator at ~700 hz, deterministic for a seed
    pub(crate) fn synthetic_frame(seed: u32) -> [Scaler; M] {
        let mut state = seed;
        let mut frame = [0.0; M];
        let (mut y1, mut y2) = (0.0, 0.0);
        for x in frame.iter_mut() {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let e = ((state >> 16) & 0x7fff) as Scaler / 16384.0 - 1.0;
            let y = 1000.0 * e + 1.3 * y1 - 0.8 * y2;
            y2 = y1;
            y1 = y;
            *x = y;
        }
        frame
    }

    pub(crate) fn hann() -> [Scaler; M] {
        let mut window = [0.0; M];
        for (n, w) in window.iter_mut().enumerate() {
            *w = 0.5 - 0.5 * (2.0 * PI * n as Scaler / (M - 1) as Scaler).cos();
        }
        window
    }

    #[test]
    fn analysis_finds_every_root() {
        let encoder = Encoder::new(CodecConfig::default(), Codebooks::builtin()).unwrap();

        let analysis = encoder.speech_to_uq_lsps(&synthetic_frame(1), &hann()).unwrap();

        assert!(analysis.roots_found);
        assert!(analysis.energy > 0.0);
        assert_eq!(analysis.ak[0], 1.0);
        assert!(analysis.lsps.windows(2).all(|w| w[1] > w[0]), "{:?}", analysis.lsps);
    }

    #[test]
    fn failed_root_search_uses_benign_lsps() {
        let encoder = Encoder::new(CodecConfig::default(), Codebooks::builtin()).unwrap();
        let samples = [Scaler::NAN; M];

        let analysis = encoder.speech_to_uq_lsps(&samples, &hann()).unwrap();

        assert!(!analysis.roots_found);
        for (i, lsp) in analysis.lsps.iter().enumerate() {
            assert_eq!(*lsp, (PI / LPC_ORD as Scaler) * i as Scaler);
        }

        // still encodable
        let frame = encoder.encode(&samples, &hann(), 0.1, &FrameHistory::default()).unwrap();
        assert_eq!(frame.indices.energy, 0);
    }

    #[test]
    fn frame_length_is_checked() {
        let encoder = Encoder::new(CodecConfig::default(), Codebooks::builtin()).unwrap();

        let result = encoder.speech_to_uq_lsps(&[0.0; 100], &hann());

        assert!(matches!(
            result,
            Err(EncodeError::FrameLengthMismatch {
                expected: 320,
                actual: 100
            })
        ));
    }

    #[test]
    fn unsupported_order_is_rejected() {
        let mut config = CodecConfig::default();
        config.order = 12;

        let result = Encoder::new(config, Codebooks::builtin());

        assert!(matches!(
            result,
            Err(EncodeError::Lsp(LspError::UnsupportedOrder { expected: 10, actual: 12 }))
        ));
    }

    #[test]
    fn encoded_indices_fit_their_widths() {
        let codebooks = Codebooks::builtin();
        let config = CodecConfig::new(LspScheme::DeltaTime(DeltaTimeMode::All)).with_pitch_coding(PitchCoding::Delta);
        let encoder = Encoder::new(config, codebooks).unwrap();
        let mut history = FrameHistory::new(&config);

        for seed in 1..5 {
            let frame = encoder
                .encode(&synthetic_frame(seed), &hann(), 0.05 + 0.01 * seed as Scaler, &history)
                .unwrap();

            let bits = config.lsp_scheme.bits(&codebooks);
            for (index, bits) in frame.indices.lsp.iter().zip(bits.iter()) {
                assert!(*index < 1 << *bits);
            }
            assert!(frame.indices.energy < config.e_levels);
            assert!(frame.indices.wo < 1 << config.wo_dt_bits);
            history = frame.history;
        }
    }

    #[test]
    fn model_fit_degrades_with_quantisation() {
        let mut encoder = Encoder::new(CodecConfig::default(), Codebooks::builtin()).unwrap();
        let samples = synthetic_frame(7);
        let window = hann();
        let history = FrameHistory::default();
        let mut model = SinusoidalModel::new(2.0 * PI / 57.0);

        // the first pass fills the model with the unquantised LPC amplitudes
        encoder
            .lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Direct, &history)
            .unwrap();
        let reference = model;

        let (direct, _) = encoder
            .lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Direct, &history)
            .unwrap();
        assert_eq!(direct, Scaler::INFINITY);

        let mut model = reference;
        let (quantised, ak) = encoder
            .lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Quantised, &history)
            .unwrap();
        assert!(quantised.is_finite());
        assert_eq!(ak[0], 1.0);
        assert!(model.amplitudes[1..=model.l].iter().all(|a| *a > 0.0));
    }

    #[test]
    fn expanded_model_round_trips_through_lsps() {
        let mut encoder = Encoder::new(CodecConfig::default(), Codebooks::builtin()).unwrap();
        let samples = synthetic_frame(3);
        let window = hann();
        let history = FrameHistory::default();
        let mut model = SinusoidalModel::new(2.0 * PI / 61.0);
        encoder
            .lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Direct, &history)
            .unwrap();

        let (snr, ak) = encoder
            .lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Expanded, &history)
            .unwrap();

        let mut lsps = encoder.speech_to_uq_lsps(&samples, &window).unwrap().lsps;
        BandwidthExpansion::MODEL.apply(&mut lsps);
        let mut expected = [0.0; LPC_ORD + 1];
        lsp_to_lpc(&lsps, &mut expected);
        assert_eq!(ak, expected);
        assert!(snr.is_finite(), "{}", snr);
    }
}
