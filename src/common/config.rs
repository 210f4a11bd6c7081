use super::{
    complex::Scaler,
    constants::{FFT_DEC, LPC_ORD},
};
use crate::quantise::LspScheme;
use core::f32::consts::PI;

/// How the fundamental frequency is sent for each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchCoding {
    /// Index of Wo over the full pitch range
    Absolute,

    /// Signed index of the change in Wo since the previous frame
    Delta,
}

#[derive(Debug, Clone, Copy)]
pub struct CodecConfig {
    /// Sampling frequency in hz (e.g. 8000)
    pub fs: usize,

    /// LPC order (e.g. 10)
    pub order: usize,

    /// Number of samples in the analysis window (e.g. 320)
    pub m: usize,

    /// Minimum pitch period in samples (e.g. 20)
    pub p_min: usize,

    /// Maximum pitch period in samples (e.g. 160)
    pub p_max: usize,

    /// Number of levels of the absolute Wo quantiser (e.g. 128)
    pub wo_levels: usize,

    /// Width of a delta Wo index including the sign bit (e.g. 3)
    pub wo_dt_bits: usize,

    /// Number of levels of the energy quantiser (e.g. 32)
    pub e_levels: usize,

    /// Lowest quantised energy in dB (e.g. -10)
    pub e_min_db: Scaler,

    /// Highest quantised energy in dB (e.g. 40)
    pub e_max_db: Scaler,

    /// Size of the spectral transform used for amplitude reconstruction (e.g. 512)
    pub fft_size: usize,

    /// The LSP quantiser used for every frame
    pub lsp_scheme: LspScheme,

    /// Absolute or delta coding of Wo
    pub pitch_coding: PitchCoding,
}

impl CodecConfig {
    pub const fn new(lsp_scheme: LspScheme) -> Self {
        Self {
            fs: 8000,
            order: LPC_ORD,
            m: 320,
            p_min: 20,
            p_max: 160,
            wo_levels: 128,
            wo_dt_bits: 3,
            e_levels: 32,
            e_min_db: -10.0,
            e_max_db: 40.0,
            fft_size: FFT_DEC,
            lsp_scheme,
            pitch_coding: PitchCoding::Absolute,
        }
    }

    pub const fn with_pitch_coding(mut self, pitch_coding: PitchCoding) -> Self {
        self.pitch_coding = pitch_coding;
        self
    }

    /// Lowest representable Wo (radians per sample)
    pub fn wo_min(&self) -> Scaler {
        2.0 * PI / self.p_max as Scaler
    }

    /// Highest representable Wo (radians per sample)
    pub fn wo_max(&self) -> Scaler {
        2.0 * PI / self.p_min as Scaler
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(LspScheme::SplitScalar)
    }
}
