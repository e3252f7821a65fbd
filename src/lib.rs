pub mod c4;
pub mod config;
pub mod error;
pub mod play;
pub mod strategy;
