pub mod batch;
pub use batch::*;

pub mod lengths;
pub use lengths::*;

pub mod runner;
pub use runner::*;
