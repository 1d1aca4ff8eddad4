//! Domain models for the AgriRate platform

mod advice;
mod market;
mod weather;

pub use advice::*;
pub use market::*;
pub use weather::*;
