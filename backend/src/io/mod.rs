//! # IO Module
//!
//! External collaborators the domain layer talks to for file export and
//! import.

pub mod file_transfer;

pub use file_transfer::{DiskFileTransfer, FileTransfer};
