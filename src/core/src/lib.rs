pub mod club;
pub mod common;
pub mod shared;
pub mod utils;

#[cfg(test)]
mod fixtures;

pub use club::*;
pub use common::*;
