pub mod classification_service;

pub use classification_service::ClassificationService;
