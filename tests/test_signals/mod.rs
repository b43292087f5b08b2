mod generate;

pub use generate::{attenuation_db, multitone, rms, sine};
