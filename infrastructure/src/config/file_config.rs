//! File-based configuration schema

use roundtable_application::{BehaviorConfig, RetryPolicy};
use roundtable_domain::Role;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Which provider API backs a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A role's generation-capability binding: provider plus model id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBindingConfig {
    pub provider: ProviderKind,
    pub model: String,
}

impl RoleBindingConfig {
    fn new(provider: ProviderKind, model: &str) -> Self {
        Self {
            provider,
            model: model.to_string(),
        }
    }
}

/// Per-role bindings, fixed at configuration time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    pub moderator: RoleBindingConfig,
    pub panelist_a: RoleBindingConfig,
    pub panelist_b: RoleBindingConfig,
    pub panelist_c: RoleBindingConfig,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            moderator: RoleBindingConfig::new(ProviderKind::Anthropic, "claude-sonnet-4-5"),
            panelist_a: RoleBindingConfig::new(ProviderKind::OpenAi, "gpt-5"),
            panelist_b: RoleBindingConfig::new(ProviderKind::Anthropic, "claude-sonnet-4-5"),
            panelist_c: RoleBindingConfig::new(ProviderKind::Gemini, "gemini-2.5-pro"),
        }
    }
}

impl RolesConfig {
    /// The binding configured for a role
    pub fn binding_for(&self, role: Role) -> &RoleBindingConfig {
        match role {
            Role::Moderator => &self.moderator,
            Role::PanelistA => &self.panelist_a,
            Role::PanelistB => &self.panelist_b,
            Role::PanelistC => &self.panelist_c,
        }
    }

    /// Provider kinds any configured role actually uses
    pub fn providers_in_use(&self) -> Vec<ProviderKind> {
        let mut kinds: Vec<ProviderKind> = Role::all()
            .into_iter()
            .map(|role| self.binding_for(role).provider)
            .collect();
        kinds.sort_by_key(|k| k.as_str());
        kinds.dedup();
        kinds
    }
}

/// Settings for one provider API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl ProviderSettings {
    fn new(api_key_env: &str) -> Self {
        Self {
            api_key_env: api_key_env.to_string(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::new("")
    }
}

/// API key sources per provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub anthropic: ProviderSettings,
    pub openai: ProviderSettings,
    pub gemini: ProviderSettings,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            anthropic: ProviderSettings::new("ANTHROPIC_API_KEY"),
            openai: ProviderSettings::new("OPENAI_API_KEY"),
            gemini: ProviderSettings::new("GEMINI_API_KEY"),
        }
    }
}

impl ProvidersConfig {
    pub fn settings_for(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Gemini => &self.gemini,
        }
    }
}

/// Engine behavior knobs as they appear in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorFileConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub max_refinement_rounds: usize,
    pub request_timeout_secs: u64,
}

impl Default for BehaviorFileConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
            max_refinement_rounds: 3,
            request_timeout_secs: 120,
        }
    }
}

/// Session storage location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub sessions_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sessions_dir: PathBuf::from("sessions"),
        }
    }
}

/// Root configuration schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub roles: RolesConfig,
    pub providers: ProvidersConfig,
    pub behavior: BehaviorFileConfig,
    pub storage: StorageConfig,
}

impl FileConfig {
    /// Project the file schema onto the engine's behavior config
    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_retry(RetryPolicy {
                max_attempts: self.behavior.max_attempts,
                base_delay: Duration::from_millis(self.behavior.base_delay_ms),
                max_delay: Duration::from_millis(self.behavior.max_delay_ms),
            })
            .with_max_refinement_rounds(self.behavior.max_refinement_rounds)
    }

    /// HTTP timeout for provider clients
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.behavior.request_timeout_secs)
    }
}
