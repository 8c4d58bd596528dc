//! Word arithmetic and seed values shared by every generator

pub mod seed;
pub mod word;
