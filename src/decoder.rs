// Copyright 2022 David Haig
// Licensed under the Apache License, Version 2.0 (the "License");

use crate::{
    amplitude::{apply_lpc_correction, AmplitudeReconstructor},
    common::{
        codebook::Codebooks,
        complex::Scaler,
        config::{CodecConfig, PitchCoding},
        constants::LPC_ORD,
        lsp::{bw_expand_lsps, check_lsp_order, check_order, LspError},
        model::{FrameHistory, SinusoidalModel},
    },
    encoder::FrameIndices,
    lpc::lsp_to_lpc,
    quantise::scalar::{EnergyQuantiser, PitchQuantiser},
    transform::{SparseDft, SpectralTransform, TransformError},
};

#[derive(Debug)]
pub enum DecodeError {
    Lsp(LspError),
    Transform(TransformError),
}

impl From<LspError> for DecodeError {
    fn from(err: LspError) -> Self {
        Self::Lsp(err)
    }
}

impl From<TransformError> for DecodeError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DecodedFrame {
    /// SNR (dB) of the reconstructed amplitudes against those already in the model
    pub snr: Scaler,

    /// Dequantised frame energy
    pub energy: Scaler,

    /// LPC coefficients of the spectral envelope, ak[0] = 1
    pub ak: [Scaler; LPC_ORD + 1],

    /// LSPs after ordering and bandwidth expansion (radians)
    pub lsps: [Scaler; LPC_ORD],

    /// Carry this into the next frame
    pub history: FrameHistory,
}

pub struct Decoder<T: SpectralTransform = SparseDft> {
    config: CodecConfig,
    codebooks: Codebooks,
    pitch: PitchQuantiser,
    energy: EnergyQuantiser,
    amplitudes: AmplitudeReconstructor<T>,
}

impl Decoder<SparseDft> {
    pub fn new(config: CodecConfig, codebooks: Codebooks) -> Result<Self, DecodeError> {
        let transform = SparseDft::new(config.fft_size)?;
        Self::with_transform(config, codebooks, transform)
    }
}

impl<T: SpectralTransform> Decoder<T> {
    pub fn with_transform(config: CodecConfig, codebooks: Codebooks, transform: T) -> Result<Self, DecodeError> {
        check_order(config.order, LPC_ORD)?;

        Ok(Self {
            config,
            codebooks,
            pitch: PitchQuantiser::new(&config),
            energy: EnergyQuantiser::new(&config),
            amplitudes: AmplitudeReconstructor::new(transform)?,
        })
    }

    /// Rebuilds the harmonic amplitudes of `model` from the LSP and energy indices.
    /// Wo and the number of harmonics must already be set in `model`.
    pub fn decode_amplitudes(
        &mut self,
        lsp_indices: &[usize],
        energy_index: usize,
        model: &mut SinusoidalModel,
        history: &FrameHistory,
    ) -> Result<DecodedFrame, DecodeError> {
        let mut lsps = [0.0; LPC_ORD];
        self.config
            .lsp_scheme
            .decode(&self.codebooks, lsp_indices, &history.lsps, &mut lsps, self.config.order)?;

        // the encoder predicts from the LSPs before they are repaired
        let next = FrameHistory {
            lsps,
            wo: history.wo,
        };

        check_lsp_order(&mut lsps);
        bw_expand_lsps(&mut lsps);

        let mut ak = [0.0; LPC_ORD + 1];
        lsp_to_lpc(&lsps, &mut ak);

        let energy = self.energy.decode(energy_index);
        let snr = self.amplitudes.aks_to_m2(&ak, model, energy);
        apply_lpc_correction(model);

        Ok(DecodedFrame {
            snr,
            energy,
            ak,
            lsps,
            history: next,
        })
    }

    /// Decodes Wo then the amplitudes of one frame into `model`. On error `model` is
    /// left as it was.
    pub fn decode(
        &mut self,
        indices: &FrameIndices,
        model: &mut SinusoidalModel,
        history: &FrameHistory,
    ) -> Result<DecodedFrame, DecodeError> {
        let wo = match self.config.pitch_coding {
            PitchCoding::Absolute => self.pitch.decode(indices.wo),
            PitchCoding::Delta => self.pitch.decode_dt(indices.wo, history.wo),
        };
        let (prev_wo, prev_l) = (model.wo, model.l);
        model.set_wo(wo);

        let mut frame = match self.decode_amplitudes(&indices.lsp, indices.energy, model, history) {
            Ok(frame) => frame,
            Err(err) => {
                model.wo = prev_wo;
                model.l = prev_l;
                return Err(err);
            }
        };
        frame.history.wo = wo;

        log::trace!("wo {} harmonics {} energy {}", wo, model.l, frame.energy);
        Ok(frame)
    }
}
