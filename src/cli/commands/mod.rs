mod context;
pub mod export;
pub mod get;
pub mod init;
pub mod languages;

pub use context::CommandContext;
