//! Role-to-provider routing
//!
//! The explicit mapping from each role to the provider client and model
//! that back it. Bindings are resolved once at configuration time; a
//! discussion never performs a dynamic provider lookup.

use super::ChatProvider;
use async_trait::async_trait;
use roundtable_application::{GenerationError, GenerationGateway};
use roundtable_domain::{GenerationRequest, Role};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Error raised when the binding table is incomplete
#[derive(Error, Debug, PartialEq)]
#[error("no generation binding configured for {0}")]
pub struct BindingError(pub Role);

struct Binding {
    provider: Arc<dyn ChatProvider>,
    model: String,
}

/// Gateway dispatching each role to its configured provider and model
pub struct RoleBindings {
    bindings: HashMap<Role, Binding>,
}

impl RoleBindings {
    /// Start an empty binding table
    pub fn builder() -> RoleBindingsBuilder {
        RoleBindingsBuilder {
            bindings: HashMap::new(),
        }
    }
}

/// Builder collecting one binding per role
pub struct RoleBindingsBuilder {
    bindings: HashMap<Role, Binding>,
}

impl RoleBindingsBuilder {
    pub fn bind(
        mut self,
        role: Role,
        provider: Arc<dyn ChatProvider>,
        model: impl Into<String>,
    ) -> Self {
        self.bindings.insert(
            role,
            Binding {
                provider,
                model: model.into(),
            },
        );
        self
    }

    /// Finish the table; every role must be bound
    pub fn build(self) -> Result<RoleBindings, BindingError> {
        for role in Role::all() {
            if !self.bindings.contains_key(&role) {
                return Err(BindingError(role));
            }
        }
        Ok(RoleBindings {
            bindings: self.bindings,
        })
    }
}

#[async_trait]
impl GenerationGateway for RoleBindings {
    async fn generate(
        &self,
        role: Role,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let binding = self
            .bindings
            .get(&role)
            .ok_or_else(|| GenerationError::InvalidRequest(format!("no binding for {role}")))?;
        binding.provider.complete(&binding.model, request).await
    }
}
