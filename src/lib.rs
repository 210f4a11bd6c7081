#![no_std]

//! LSP and spectral amplitude quantisation for a low bit rate harmonic speech codec.
//!
//! Frames are analysed into LPC coefficients, converted to line spectral pairs and
//! quantised to codebook indices. The decoder reverses the process and samples the
//! LPC envelope at each harmonic of the fundamental to recover the amplitudes.

#[cfg(feature = "std")]
extern crate std;

pub mod amplitude;
pub mod common;
pub mod decoder;
pub mod encoder;
pub mod lpc;
pub mod quantise;
pub mod tables;
pub mod transform;
