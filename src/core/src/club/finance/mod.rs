mod manager;
mod transaction;

pub use manager::*;
pub use transaction::*;
