// src/types/mod.rs
pub mod records;

pub use records::*;
