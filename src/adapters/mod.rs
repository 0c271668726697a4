// Adapters layer: concrete implementations for external systems (file storage, export formats).

pub mod export;
pub mod storage;

pub use export::{ExportFormat, StudentExporter};
pub use storage::LocalStorage;
