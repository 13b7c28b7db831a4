//! Utilities shared by the Matsuri packages.

pub mod logger;
pub mod time;
