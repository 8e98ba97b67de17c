pub mod colors;
pub mod export;
