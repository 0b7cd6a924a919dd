pub mod finance;
pub mod player;
pub mod team;

pub use finance::*;
pub use player::*;
pub use team::*;
