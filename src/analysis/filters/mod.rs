pub mod length;
pub mod stopword;
