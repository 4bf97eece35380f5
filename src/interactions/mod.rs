mod reflection;
mod interactions_2d;

pub use reflection::reflect;
pub(crate) use reflection::reflect_unit;
pub use interactions_2d::*;

#[cfg(test)]
mod interactions_2d_tests;
