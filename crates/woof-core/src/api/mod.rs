//! File level API, each operation configured through a small builder.

pub mod embed;
pub mod extract;
pub mod extract_raw;
pub mod info;
