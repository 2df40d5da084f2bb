pub mod verification;

pub use verification::{VerificationRequest, VerificationResult};
