//! Attests, at runtime, the time complexity of the katas. See:
//!   - [analysis] for the big-O classification of two measured passes
//!   - [runners] for the code that runs & times those passes -- and fails tests when an algorithm is slower than expected
//!   - [types] & [measurements] for the reported data

pub mod types;
pub mod measurements;
pub mod analysis;
pub mod runners;
