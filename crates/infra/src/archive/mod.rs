//! Filesystem archive tree

mod fs_store;

pub use fs_store::FsArchiveStore;
