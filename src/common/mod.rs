pub mod context;
pub mod format;
pub mod permissions;
