pub mod imports;
pub mod treesitter;
pub mod walker;
