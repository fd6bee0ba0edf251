pub mod catalog;
pub mod entities;

pub use entities::*;
