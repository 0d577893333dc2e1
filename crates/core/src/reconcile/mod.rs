//! Add and remove modes

pub mod service;

pub use service::Reconciler;
