//! Term store over SQLite

pub mod init;
pub mod terms;

pub use init::*;
pub use terms::*;
