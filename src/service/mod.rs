pub mod api;
pub mod export;

pub use api::{ApiClient, ExportPayload};
pub use export::{export_filename, save_artifact, ExportFormat};
