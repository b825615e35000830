pub mod app_config;
pub mod memory_repo;
pub mod notifier;

pub use memory_repo::InMemoryTourRepository;
pub use notifier::LogNotifier;
