pub mod domain;
pub mod error;
pub mod interfaces;

pub use domain::constants::*;
