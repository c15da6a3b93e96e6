pub mod editor_service;
pub mod export_service;
pub mod import_service;
