//! Profiles naive and bucket-based multi-scalar multiplication over the G1
//! and G2 groups of pairing-friendly curves, and cross-checks their answers

pub mod curves;
pub mod error;
pub mod generate;
pub mod multiexp;
pub mod naive;
pub mod operations;
pub mod pippenger;
pub mod profile;
pub mod report;
pub mod sid_pippenger;

pub use crate::multiexp::{multi_exp, MultiExpMethod};
pub use error::BenchError;
