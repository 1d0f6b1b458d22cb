pub mod documents;
pub mod inverted;
pub mod posting;
