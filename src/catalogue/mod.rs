//! The broader catalogue of interview exercises, grouped by the kind of data they work on,
//! plus a [runner] showing each of them in action.

pub mod arrays;
pub mod strings;
pub mod numbers;
pub mod objects;
pub mod runner;
