//! CLI command implementations.

pub mod init;
pub mod evaluate;
pub mod demo;
