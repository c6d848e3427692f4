pub mod burst;
pub mod constants;
pub mod motion;
pub mod reaction;

pub use burst::*;
pub use constants::*;
pub use motion::*;
pub use reaction::*;
