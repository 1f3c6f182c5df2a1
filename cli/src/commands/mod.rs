//! Command implementations

pub mod lint;
pub mod logs;
pub mod stack;
pub mod version;
