//! Entity module - SeaORM entity definitions
//!
//! One entity per table backing the directory

pub mod compensation;
pub mod employee;
