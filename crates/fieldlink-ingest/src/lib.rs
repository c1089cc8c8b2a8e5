#![deny(unsafe_code)]

//! Concrete [`fieldlink_model::SourceProvider`] implementations over the
//! workbench's two export formats: CSV dumps and XML configuration files.

pub mod csv_provider;
pub mod discovery;
pub mod error;
pub mod xml_provider;

pub use csv_provider::CsvDirectoryProvider;
pub use error::IngestError;
pub use xml_provider::XmlDirectoryProvider;
