use crate::common::{complex::Scaler, config::CodecConfig};
use core::f32::consts::LOG2_10;
#[allow(unused_imports)]
use num_traits::real::Real;

/// Uniform quantiser for the fundamental frequency Wo (radians per sample)
#[derive(Debug, Clone, Copy)]
pub struct PitchQuantiser {
    wo_min: Scaler,
    wo_max: Scaler,
    levels: usize,
    dt_bits: usize,
}

impl PitchQuantiser {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            wo_min: config.wo_min(),
            wo_max: config.wo_max(),
            levels: config.wo_levels,
            dt_bits: config.wo_dt_bits,
        }
    }

    /// Distance between adjacent levels (radians per sample)
    pub fn step(&self) -> Scaler {
        (self.wo_max - self.wo_min) / self.levels as Scaler
    }

    /// Range of signed delta indices that fit in the delta index width
    pub fn dt_range(&self) -> (i32, i32) {
        let max_index = (1 << (self.dt_bits - 1)) - 1;
        (-(max_index + 1), max_index)
    }

    fn norm_index(&self, delta: Scaler) -> Scaler {
        let norm = delta / (self.wo_max - self.wo_min);
        (self.levels as Scaler * norm + 0.5).floor()
    }

    /// Index of the level nearest `wo`, clamped to the valid range
    pub fn encode(&self, wo: Scaler) -> usize {
        let index = self.norm_index(wo - self.wo_min);
        index.max(0.0).min((self.levels - 1) as Scaler) as usize
    }

    pub fn decode(&self, index: usize) -> Scaler {
        self.wo_min + self.step() * index as Scaler
    }

    /// Encodes the change in Wo since the previous frame. The signed index is hard
    /// limited then masked to `dt_bits` (two's complement, top bit is the sign).
    pub fn encode_dt(&self, wo: Scaler, prev_wo: Scaler) -> usize {
        let (min_index, max_index) = self.dt_range();
        let index = self
            .norm_index(wo - prev_wo)
            .max(min_index as Scaler)
            .min(max_index as Scaler) as i32;

        let mask = (1 << self.dt_bits) - 1;
        (index & mask) as usize
    }

    pub fn decode_dt(&self, index: usize, prev_wo: Scaler) -> Scaler {
        let mut index = index as i32;

        // sign extend
        if index & (1 << (self.dt_bits - 1)) != 0 {
            index |= !((1 << self.dt_bits) - 1);
        }

        prev_wo + self.step() * index as Scaler
    }
}

/// Uniform quantiser for frame energy in the log domain
#[derive(Debug, Clone, Copy)]
pub struct EnergyQuantiser {
    e_min_db: Scaler,
    e_max_db: Scaler,
    levels: usize,
}

impl EnergyQuantiser {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            e_min_db: config.e_min_db,
            e_max_db: config.e_max_db,
            levels: config.e_levels,
        }
    }

    /// Distance between adjacent levels (dB)
    pub fn step(&self) -> Scaler {
        (self.e_max_db - self.e_min_db) / self.levels as Scaler
    }

    /// Index of the level nearest `e` (linear energy), clamped to the valid range.
    /// Zero energy maps to the bottom level.
    pub fn encode(&self, e: Scaler) -> usize {
        let e_db = 10.0 * e.log10();
        let norm = (e_db - self.e_min_db) / (self.e_max_db - self.e_min_db);
        let index = (self.levels as Scaler * norm + 0.5).floor();

        index.max(0.0).min((self.levels - 1) as Scaler) as usize
    }

    /// Linear energy of the level at `index`
    pub fn decode(&self, index: usize) -> Scaler {
        let e_db = self.e_min_db + self.step() * index as Scaler;

        // 10^(e_db / 10)
        fast_math::exp2(e_db / 10.0 * LOG2_10)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn pitch_round_trip_is_within_half_a_step() {
        let config = CodecConfig::default();
        let pitch = PitchQuantiser::new(&config);

        let mut wo = config.wo_min();
        while wo < config.wo_max() - pitch.step() {
            let index = pitch.encode(wo);
            assert!(index < config.wo_levels);
            assert!((pitch.decode(index) - wo).abs() <= pitch.step() / 2.0 + 1e-6);
            wo += 0.0013;
        }
    }

    #[test]
    fn pitch_is_clamped() {
        let config = CodecConfig::default();
        let pitch = PitchQuantiser::new(&config);

        assert_eq!(pitch.encode(0.0), 0);
        assert_eq!(pitch.encode(config.wo_min()), 0);
        assert_eq!(pitch.encode(config.wo_max()), 127);
        assert_eq!(pitch.encode(3.0), 127);
        assert!((pitch.decode(0) - config.wo_min()).abs() < 1e-7);
    }

    #[test]
    fn delta_pitch_recovers_every_signed_index() {
        let config = CodecConfig::default();
        let pitch = PitchQuantiser::new(&config);
        let prev_wo = 0.1;

        assert_eq!(pitch.dt_range(), (-4, 3));
        for i in -4..=3 {
            let wo = prev_wo + pitch.step() * i as Scaler;

            let index = pitch.encode_dt(wo, prev_wo);

            assert!(index < 8);
            assert_eq!(pitch.decode_dt(index, prev_wo), prev_wo + pitch.step() * i as Scaler, "{}", i);
        }
    }

    #[test]
    fn delta_pitch_is_hard_limited() {
        let config = CodecConfig::default();
        let pitch = PitchQuantiser::new(&config);
        let prev_wo = 0.1;

        // far above and far below the previous frame
        assert_eq!(pitch.encode_dt(prev_wo + 0.2, prev_wo), 3);
        assert_eq!(pitch.encode_dt(prev_wo - 0.2, prev_wo), 4);
        assert_eq!(pitch.decode_dt(4, prev_wo), prev_wo - 4.0 * pitch.step());
    }

    #[test]
    fn energy_bounds() {
        let config = CodecConfig::default();
        let energy = EnergyQuantiser::new(&config);

        let e_min = (10.0 as Scaler).powf(config.e_min_db / 10.0);
        let e_max = (10.0 as Scaler).powf(config.e_max_db / 10.0);

        assert_eq!(energy.encode(e_min), 0);
        assert_eq!(energy.encode(e_max), config.e_levels - 1);
        assert_eq!(energy.encode(0.0), 0);
        assert_eq!(energy.encode(1.0e9), config.e_levels - 1);
    }

    #[test]
    fn energy_round_trip_is_within_one_step() {
        let config = CodecConfig::default();
        let energy = EnergyQuantiser::new(&config);

        let mut e_db = config.e_min_db;
        while e_db <= config.e_max_db {
            let e = (10.0 as Scaler).powf(e_db / 10.0);

            let index = energy.encode(e);

            assert!(index < config.e_levels);
            let decoded_db = 10.0 * energy.decode(index).log10();
            assert!((decoded_db - e_db).abs() <= energy.step() + 1e-3, "{} {}", e_db, decoded_db);
            e_db += 0.7;
        }
    }
}
