//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    BehaviorFileConfig, FileConfig, ProviderKind, ProviderSettings, ProvidersConfig,
    RoleBindingConfig, RolesConfig, StorageConfig,
};
pub use loader::ConfigLoader;
