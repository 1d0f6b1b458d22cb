pub mod executor;
pub mod fuzzy;
pub mod highlight;
pub mod prefix;
pub mod results;
