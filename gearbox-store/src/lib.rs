pub mod app_config;
pub mod memory;
pub mod seed;

pub use app_config::{Config, ServerConfig};
pub use memory::MemoryStore;
pub use seed::seed_demo_data;
