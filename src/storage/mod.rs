pub mod browsers;
pub mod games;
pub mod interface;
