//! Archive mode

pub mod links;
pub mod ports;
pub mod service;

pub use service::ArchiveService;
