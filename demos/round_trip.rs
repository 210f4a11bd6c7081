use log::info;
use lsp_quant::{
    common::{
        codebook::Codebooks,
        complex::Scaler,
        config::{CodecConfig, PitchCoding},
        model::{FrameHistory, SinusoidalModel},
    },
    decoder::{DecodeError, Decoder},
    encoder::{EncodeError, Encoder, LpcModelling},
    quantise::{DeltaTimeMode, LspScheme},
};
use simple_logger::SimpleLogger;
use std::f32::consts::PI;

#[derive(Debug)]
pub enum MainError {
    Encode(EncodeError),
    Decode(DecodeError),
}

impl From<EncodeError> for MainError {
    fn from(err: EncodeError) -> Self {
        Self::Encode(err)
    }
}

impl From<DecodeError> for MainError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

const NUM_FRAMES: usize = 8;

// vowel-like frame: a harmonic series at the given pitch shaped by two formants
fn synthesize(config: &CodecConfig, wo: Scaler, frame_index: usize, samples: &mut [Scaler]) {
    let formants = [(700.0, 120.0), (1200.0, 150.0)];
    let model = SinusoidalModel::new(wo);
    let offset = (frame_index * config.m / 2) as Scaler;

    for (n, x) in samples.iter_mut().enumerate() {
        let t = offset + n as Scaler;
        let mut sum = 0.0;
        for m in 1..=model.l {
            let hz = m as Scaler * wo * config.fs as Scaler / (2.0 * PI);
            let gain: Scaler = formants
                .iter()
                .map(|(centre, width)| 1.0 / (1.0 + ((hz - centre) / width) * ((hz - centre) / width)))
                .sum();
            sum += 1000.0 * gain * (m as Scaler * wo * t).cos();
        }
        *x = sum;
    }
}

fn run(scheme: LspScheme, pitch_coding: PitchCoding) -> Result<(), MainError> {
    let config = CodecConfig::new(scheme).with_pitch_coding(pitch_coding);
    let codebooks = Codebooks::builtin();
    let mut encoder = Encoder::new(config, codebooks)?;
    let mut decoder = Decoder::new(config, codebooks)?;

    let window: Vec<Scaler> = (0..config.m)
        .map(|n| 0.5 - 0.5 * (2.0 * PI * n as Scaler / (config.m - 1) as Scaler).cos())
        .collect();
    let mut samples = vec![0.0; config.m];

    let mut enc_history = FrameHistory::new(&config);
    let mut dec_history = FrameHistory::new(&config);
    let mut snr_sum = 0.0;

    for frame_index in 0..NUM_FRAMES {
        // pitch glides from 120 hz to 155 hz
        let wo = 2.0 * PI * (120.0 + 5.0 * frame_index as Scaler) / config.fs as Scaler;
        synthesize(&config, wo, frame_index, &mut samples);

        let mut model = SinusoidalModel::new(wo);
        encoder.lpc_model_amplitudes(&samples, &window, &mut model, LpcModelling::Direct, &enc_history)?;
        let reference = model;

        let frame = encoder.encode(&samples, &window, wo, &enc_history)?;
        enc_history = frame.history;

        model = reference;
        let decoded = decoder.decode(&frame.indices, &mut model, &dec_history)?;
        dec_history = decoded.history;

        info!(
            "frame {frame_index} lsp {:?} energy {} wo {} snr {:.2} dB",
            frame.indices.lsp, frame.indices.energy, frame.indices.wo, decoded.snr
        );
        snr_sum += decoded.snr;
    }

    info!(
        "{:?} {:?} average snr {:.2} dB over {} frames",
        scheme,
        pitch_coding,
        snr_sum / NUM_FRAMES as Scaler,
        NUM_FRAMES
    );
    Ok(())
}

fn main() -> Result<(), MainError> {
    SimpleLogger::new().init().unwrap();

    run(LspScheme::SplitScalar, PitchCoding::Absolute)?;
    run(LspScheme::DeltaScalar, PitchCoding::Absolute)?;
    run(LspScheme::FullVector, PitchCoding::Absolute)?;
    run(LspScheme::Jnd, PitchCoding::Absolute)?;
    run(LspScheme::DeltaTime(DeltaTimeMode::All), PitchCoding::Delta)?;

    Ok(())
}
