//! Domain layer: the constants themselves and the catalogue describing them.

pub mod constants;
pub mod fee_constant;
pub mod table;
