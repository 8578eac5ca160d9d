mod config;
mod monotonic;
mod random;

pub use config::*;
pub use monotonic::*;
pub use random::*;
