pub mod config_service;
pub mod dto;
pub mod file_entry_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_entry_repository::FileEntryRepository;
pub use crate::paths::SoulnotePaths;
