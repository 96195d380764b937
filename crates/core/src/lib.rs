pub mod config;
pub mod dataset;
pub mod error;
pub mod ticket;

pub use config::Config;
pub use error::*;
pub use ticket::*;
