pub mod audio;
pub mod metadata;
pub mod observability;
pub mod storage;
