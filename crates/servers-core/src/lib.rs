pub mod filter;
pub mod load;
pub mod types;
