#![warn(clippy::pedantic)]

pub mod browse;
pub mod log;
pub mod settings;

pub use settings::Settings;
