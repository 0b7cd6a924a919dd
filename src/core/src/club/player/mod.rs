pub mod attributes;
mod builder;
pub mod collection;
pub mod development;
pub mod fitness;
pub mod generator;
mod player;
pub mod statistics;

pub use attributes::*;
pub use builder::*;
pub use collection::*;
pub use development::*;
pub use fitness::*;
pub use generator::*;
pub use player::*;
pub use statistics::*;
