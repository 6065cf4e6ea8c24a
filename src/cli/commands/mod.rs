//! CLI command implementations

pub mod begin;
pub mod complete;
pub mod content;
pub mod finish;
pub mod init;
pub mod modules;
pub mod restart;
pub mod select;
pub mod session;
pub mod status;
