pub mod codebook;
pub mod complex;
pub mod config;
pub mod constants;
pub mod lsp;
pub mod model;
