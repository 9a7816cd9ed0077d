//! Request handlers module

pub mod compensation;
pub mod employee;
