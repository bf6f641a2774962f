pub mod synth;

pub use synth::TranslateTtsClient;
