mod formation;
mod lineup;
mod tactics;

pub use formation::*;
pub use lineup::*;
pub use tactics::*;
