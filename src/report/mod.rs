pub mod plot;
pub use plot::*;

pub mod summary;
pub use summary::*;
