//! Individual validation checks, grouped by form section.

pub mod demographics;
pub mod medical;
pub mod obstetric;
