pub mod engine;
pub mod enrichment;
pub mod errors;
pub mod filters;
pub mod settings;
pub mod tracker;
