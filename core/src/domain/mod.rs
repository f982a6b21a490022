pub mod common;
pub mod recommendation;
pub mod weather;
