pub mod algorithms;
pub mod candidates;

pub use algorithms::{math, radix};
