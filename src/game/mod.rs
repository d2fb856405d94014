pub mod board;
pub use board::*;

pub mod draws;
pub use draws::*;

pub mod marks;
pub use marks::*;

pub mod trial;
pub use trial::*;
