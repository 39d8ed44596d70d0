pub mod columnar;
pub mod json;
pub mod names;
