pub(crate) mod fingerprint;
pub(crate) mod math;
pub(crate) mod rng;

pub mod error;
