pub mod diagnostics;
pub mod filter;
pub mod model;
pub mod recommend;
