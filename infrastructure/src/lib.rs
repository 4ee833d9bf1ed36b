//! Infrastructure layer for roundtable
//!
//! Adapters for the ports the application layer defines: HTTP provider
//! clients behind the generation gateway, figment-based configuration
//! loading, and the JSON file session store.

pub mod config;
pub mod providers;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ProviderKind, RoleBindingConfig};
pub use providers::{
    AnthropicProvider, ChatProvider, GeminiProvider, OpenAiProvider,
    routing::{BindingError, RoleBindings},
};
pub use store::JsonSessionStore;
