pub mod config;
pub mod environment;
pub mod hooks;
pub mod memory;
pub mod numerics;
pub mod printer;
pub mod value;

pub use printer::{show, PrintError};
