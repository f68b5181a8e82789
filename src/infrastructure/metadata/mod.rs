#[cfg(feature = "metadata")]
mod lofty_metadata_reader;
mod metadata_reader_factory;
mod noop_metadata_reader;

#[cfg(feature = "metadata")]
pub use lofty_metadata_reader::LoftyMetadataReader;
pub use metadata_reader_factory::MetadataReaderFactory;
pub use noop_metadata_reader::NoopMetadataReader;
