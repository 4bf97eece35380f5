mod vector_2d;
mod color;
mod body;

pub use vector_2d::*;
pub use color::*;
pub use body::*;
