use crate::{
    common::{
        complex::{Complex, Scaler},
        constants::{FFT_DEC, HZ_TO_RAD, LPC_CORRECTION_FACTOR, LPC_CORRECTION_WO_HZ},
        model::SinusoidalModel,
    },
    transform::{check_size, SparseDft, SpectralTransform, TransformError},
};
use core::f32::consts::PI;
#[allow(unused_imports)]
use num_traits::real::Real;

/// Samples the LPC spectral envelope at the harmonics of Wo
pub struct AmplitudeReconstructor<T: SpectralTransform = SparseDft> {
    transform: T,
    spectrum: [Complex; FFT_DEC],
}

impl AmplitudeReconstructor<SparseDft> {
    pub fn with_default_transform() -> Self {
        Self {
            transform: SparseDft::default(),
            spectrum: [Complex::default(); FFT_DEC],
        }
    }
}

impl<T: SpectralTransform> AmplitudeReconstructor<T> {
    pub fn new(transform: T) -> Result<Self, TransformError> {
        check_size(transform.size())?;

        Ok(Self {
            transform,
            spectrum: [Complex::default(); FFT_DEC],
        })
    }

    /// Transforms the LPC coefficients to harmonic amplitudes. The power spectrum
    /// P(w) = E / |A(e^jw)|^2 is integrated over the band of each harmonic
    /// [(m - 0.5) Wo, (m + 0.5) Wo] and the amplitude is the square root of the
    /// band energy.
    ///
    /// The amplitudes already in `model` are treated as the originals and the
    /// reconstruction signal to noise ratio (dB) is returned. It is -inf when there
    /// is no original signal and +inf when the reconstruction is exact.
    ///
    /// # Arguments
    ///
    /// * `ak` - LPC coefficients, ak[0] = 1
    /// * `model` - Wo and number of harmonics in, amplitudes out
    /// * `energy` - Prediction error energy of the LPC model
    pub fn aks_to_m2(&mut self, ak: &[Scaler], model: &mut SinusoidalModel, energy: Scaler) -> Scaler {
        let n = self.transform.size();
        let spectrum = &mut self.spectrum[..n];
        self.transform.forward(ak, spectrum);

        // radians per bin
        let r = 2.0 * PI / n as Scaler;
        let wo = model.wo;
        let band_edge = |x: Scaler| ((x * wo / r + 0.5).floor() as usize).min(n);

        let mut signal = 0.0;
        let mut noise = 0.0;
        for m in 1..=model.l {
            let am = band_edge(m as Scaler - 0.5);
            let bm = band_edge(m as Scaler + 0.5);

            let em: Scaler = spectrum[am..bm].iter().map(|a| energy / a.norm_sqr()).sum();
            let amplitude = em.sqrt();

            let original = model.amplitudes[m];
            signal += original * original;
            noise += (original - amplitude) * (original - amplitude);
            model.amplitudes[m] = amplitude;
        }

        log::trace!("harmonics {} signal {} noise {}", model.l, signal, noise);
        snr_db(signal, noise)
    }
}

fn snr_db(signal: Scaler, noise: Scaler) -> Scaler {
    if signal == 0.0 {
        return Scaler::NEG_INFINITY;
    }
    if noise == 0.0 {
        return Scaler::INFINITY;
    }

    10.0 * (signal / noise).log10()
}

/// Attenuates the first harmonic of low pitched frames, LPC modelling
/// overestimates it for low male voices
pub fn apply_lpc_correction(model: &mut SinusoidalModel) {
    if model.wo < LPC_CORRECTION_WO_HZ * HZ_TO_RAD {
        model.amplitudes[1] *= LPC_CORRECTION_FACTOR;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::constants::{LPC_ORD, RAD_TO_HZ};

    fn flat_filter() -> [Scaler; LPC_ORD + 1] {
        let mut ak = [0.0; LPC_ORD + 1];
        ak[0] = 1.0;
        ak
    }

    #[test]
    fn flat_envelope_counts_bins() {
        let mut reconstructor = AmplitudeReconstructor::with_default_transform();
        let mut model = SinusoidalModel::new(2.0 * PI / 41.0);
        assert_eq!(model.l, 20);

        reconstructor.aks_to_m2(&flat_filter(), &mut model, 1.0);

        // 512 / 41 = 12.5 bins per harmonic, each bin carries unit power
        for m in 1..=model.l {
            let bins = model.amplitudes[m] * model.amplitudes[m];
            assert!((bins - bins.round()).abs() < 1e-3, "{}: {}", m, bins);
            assert!(bins.round() == 12.0 || bins.round() == 13.0, "{}: {}", m, bins);
        }
        assert!((model.amplitudes[1] - (13.0 as Scaler).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn energy_scales_power() {
        let mut reconstructor = AmplitudeReconstructor::with_default_transform();
        let mut model = SinusoidalModel::new(2.0 * PI / 41.0);

        reconstructor.aks_to_m2(&flat_filter(), &mut model, 4.0);

        assert!((model.amplitudes[1] - 2.0 * (13.0 as Scaler).sqrt()).abs() < 1e-3);
    }

    #[test]
    fn exact_reconstruction_has_infinite_snr() {
        let mut reconstructor = AmplitudeReconstructor::with_default_transform();
        let mut model = SinusoidalModel::new(2.0 * PI / 57.0);

        let first = reconstructor.aks_to_m2(&flat_filter(), &mut model, 2.0);
        let second = reconstructor.aks_to_m2(&flat_filter(), &mut model, 2.0);

        // no original amplitudes on the first pass
        assert_eq!(first, Scaler::NEG_INFINITY);
        assert_eq!(second, Scaler::INFINITY);
    }

    #[test]
    fn no_harmonics_means_no_signal() {
        let mut reconstructor = AmplitudeReconstructor::with_default_transform();
        let mut model = SinusoidalModel::new(0.0);
        assert_eq!(model.l, 0);

        let snr = reconstructor.aks_to_m2(&flat_filter(), &mut model, 1.0);

        assert_eq!(snr, Scaler::NEG_INFINITY);
        assert_eq!(snr_db(0.0, 0.0), Scaler::NEG_INFINITY);
        assert_eq!(snr_db(2.0, 0.0), Scaler::INFINITY);
        assert!((snr_db(10.0, 1.0) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn resonance_peaks_at_nearest_harmonic() {
        let mut reconstructor = AmplitudeReconstructor::with_default_transform();
        // pole pair at 1000 hz
        let theta = 1000.0 * HZ_TO_RAD;
        let radius = 0.95;
        let ak = [1.0, -2.0 * radius * theta.cos(), radius * radius];
        let mut model = SinusoidalModel::new(110.0 * HZ_TO_RAD);
        assert_eq!(model.l, 36);

        let snr = reconstructor.aks_to_m2(&ak, &mut model, 1.0);

        let peak = (1..=model.l)
            .max_by(|a, b| model.amplitudes[*a].partial_cmp(&model.amplitudes[*b]).unwrap())
            .unwrap();
        assert_eq!(peak, 9);
        assert!((peak as Scaler * model.wo * RAD_TO_HZ - 990.0).abs() < 0.1);
        assert_eq!(snr, Scaler::NEG_INFINITY);
    }

    #[test]
    fn correction_only_applies_to_low_pitch() {
        let mut model = SinusoidalModel::new(100.0 * HZ_TO_RAD);
        model.amplitudes[1] = 10.0;
        model.amplitudes[2] = 10.0;

        apply_lpc_correction(&mut model);

        assert!((model.amplitudes[1] - 0.32).abs() < 1e-6);
        assert_eq!(model.amplitudes[2], 10.0);

        let mut model = SinusoidalModel::new(200.0 * HZ_TO_RAD);
        model.amplitudes[1] = 10.0;

        apply_lpc_correction(&mut model);

        assert_eq!(model.amplitudes[1], 10.0);
    }

    #[test]
    fn transform_size_is_checked() {
        assert!(AmplitudeReconstructor::new(SparseDft::default()).is_ok());
        assert!(AmplitudeReconstructor::new(SparseDft::new(256).unwrap()).is_ok());
    }
}
