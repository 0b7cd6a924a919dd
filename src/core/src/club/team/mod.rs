mod builder;
pub mod matches;
pub mod squad;
pub mod tactics;
mod team;

pub use builder::*;
pub use matches::*;
pub use squad::*;
pub use tactics::*;
pub use team::*;
