pub mod credential_service;
pub mod error;
pub mod performance_service;
pub mod record_store;
pub mod viewer;

pub use error::ServiceError;
pub use record_store::{DbRecordStore, RecordStore};
pub use viewer::Viewer;
