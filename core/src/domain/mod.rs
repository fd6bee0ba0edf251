pub mod common;
pub mod food;
pub mod health;
pub mod interaction;
pub mod reaction;
