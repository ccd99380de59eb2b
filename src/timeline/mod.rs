pub mod eval;
pub mod fingerprint;
pub mod model;
