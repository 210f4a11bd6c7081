use crate::common::{
    complex::{Complex, Scaler},
    constants::FFT_DEC,
};
use core::f32::consts::PI;
#[allow(unused_imports)]
use num_traits::real::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    UnsupportedSize { max: usize, actual: usize },
}

/// Fixed size forward transform of a real sequence
pub trait SpectralTransform {
    /// Number of output bins
    fn size(&self) -> usize;

    /// Transforms `input` (zero padded to `size()`) into `output` (length `size()`)
    fn forward(&mut self, input: &[Scaler], output: &mut [Complex]);
}

pub(crate) fn check_size(size: usize) -> Result<(), TransformError> {
    if size < 2 || size > FFT_DEC {
        return Err(TransformError::UnsupportedSize {
            max: FFT_DEC,
            actual: size,
        });
    }

    Ok(())
}

/// Direct DFT over the input samples only, the zero padding is never visited.
/// Suits a zero padded LPC filter with order + 1 taps.
#[derive(Debug, Clone, Copy)]
pub struct SparseDft {
    size: usize,
}

impl SparseDft {
    pub fn new(size: usize) -> Result<Self, TransformError> {
        check_size(size)?;
        Ok(Self { size })
    }
}

impl Default for SparseDft {
    fn default() -> Self {
        Self { size: FFT_DEC }
    }
}

impl SpectralTransform for SparseDft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&mut self, input: &[Scaler], output: &mut [Complex]) {
        let n = self.size;
        let taps = input.len().min(n);
        for (k, out) in output[..n].iter_mut().enumerate() {
            let angle = -2.0 * PI * k as Scaler / n as Scaler;
            let twiddle = Complex::new(angle.cos(), angle.sin());

            let mut phasor = Complex::new(1.0, 0.0);
            let mut acc = Complex::default();
            for x in input[..taps].iter() {
                let mut term = phasor;
                term *= *x;
                acc += term;
                phasor = phasor * twiddle;
            }
            *out = acc;
        }
    }
}

#[cfg(feature = "std")]
pub use self::fft::RustFftTransform;

#[cfg(feature = "std")]
mod fft {
    use super::{check_size, SpectralTransform, TransformError};
    use crate::common::complex::{Complex, Scaler};
    use rustfft::{num_complex::Complex32, Fft, FftPlanner};
    use std::{sync::Arc, vec, vec::Vec};

    /// Forward transform backed by a planned `rustfft` FFT
    pub struct RustFftTransform {
        fft: Arc<dyn Fft<f32>>,
        buffer: Vec<Complex32>,
    }

    impl RustFftTransform {
        pub fn new(size: usize) -> Result<Self, TransformError> {
            check_size(size)?;
            let mut planner = FftPlanner::new();
            let fft = planner.plan_fft_forward(size);

            Ok(Self {
                fft,
                buffer: vec![Complex32::new(0.0, 0.0); size],
            })
        }
    }

    impl SpectralTransform for RustFftTransform {
        fn size(&self) -> usize {
            self.buffer.len()
        }

        fn forward(&mut self, input: &[Scaler], output: &mut [Complex]) {
            for (i, x) in self.buffer.iter_mut().enumerate() {
                *x = Complex32::new(input.get(i).copied().unwrap_or(0.0), 0.0);
            }

            self.fft.process(&mut self.buffer);

            for (out, x) in output.iter_mut().zip(&self.buffer) {
                *out = Complex::new(x.re, x.im);
            }
        }
    }
}
