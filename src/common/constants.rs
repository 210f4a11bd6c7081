use super::complex::Scaler;
use core::f32::consts::PI;

// LPC order the codebooks and LSP schemes are built for
pub const LPC_ORD: usize = 10;

// max LPC order accepted by the analysis routines
pub const LPC_MAX: usize = 20;

// longest analysis window the encoder accepts
pub const MAX_WINDOW: usize = 640;

// max number of harmonics in the sinusoidal model
pub const MAX_AMP: usize = 80;

// size of the spectral transform used to sample A(exp(jw))
pub const FFT_DEC: usize = 512;

// LSPs are quantised in Hz against an 8 kHz sample rate: radians = hz * PI / 4000
pub const HZ_TO_RAD: Scaler = PI / 4000.0;
pub const RAD_TO_HZ: Scaler = 4000.0 / PI;

// grid spacing (in the cos domain) for the LSP root search
pub const LSP_DELTA1: Scaler = 0.01;

// refinement of a bracketed LSP root: the interval is halved this many times plus one
pub const LSP_ROOT_BISECTIONS: usize = 5;

// order repair pushes swapped LSPs this far apart (radians)
pub const LSP_SWAP_MARGIN: Scaler = 0.05;

// minimum LSP separation enforced by force_min_lsp_dist (radians)
pub const LSP_MIN_DIST: Scaler = 0.01;

// Harmonic 1 is attenuated by this factor when Wo is below LPC_CORRECTION_WO_HZ.
// Improves low pitched male speakers after LPC modelling.
pub const LPC_CORRECTION_FACTOR: Scaler = 0.032;
pub const LPC_CORRECTION_WO_HZ: Scaler = 150.0;

// Listening tests found that moving an LSP by less than these steps is not noticeable
pub const JND_STEPS_HZ: [Scaler; LPC_ORD] = [25.0, 25.0, 50.0, 50.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0];
