//! CLI entrypoint for Roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use roundtable_application::{ReplaySessionUseCase, RunDiscussionUseCase, SessionStore};
use roundtable_domain::{Role, Topic};
use roundtable_infrastructure::{
    AnthropicProvider, ChatProvider, ConfigLoader, FileConfig, GeminiProvider, JsonSessionStore,
    OpenAiProvider, ProviderKind, RoleBindings,
};
use roundtable_presentation::{
    Cli, Command, ConsoleSink, SessionFormatter, SkipToConsensus, TerminalPacer,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Could not load configuration: {e}"))?;

    let store = Arc::new(JsonSessionStore::new(config.storage.sessions_dir.clone()));

    match cli.command {
        Command::Discuss { topic, quiet } => discuss(&config, store, topic, quiet).await,
        Command::List => list(store.as_ref()).await,
        Command::Replay { id, fast_forward } => replay(store.as_ref(), &id, fast_forward).await,
    }
}

async fn discuss(
    config: &FileConfig,
    store: Arc<JsonSessionStore>,
    topic: String,
    quiet: bool,
) -> Result<()> {
    let Some(topic) = Topic::try_new(topic) else {
        bail!("Topic cannot be empty");
    };

    let gateway = Arc::new(build_gateway(config)?);

    // Ctrl-C requests a cooperative abort; the engine observes it at the
    // next turn boundary.
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received; finishing the current turn, then stopping");
            signal_token.cancel();
        }
    });

    let use_case = RunDiscussionUseCase::new(gateway, store)
        .with_behavior(config.behavior_config())
        .with_cancellation(token);

    let report = if quiet {
        use_case.execute(topic).await?
    } else {
        use_case.execute_with_sink(topic, &ConsoleSink::new()).await?
    };

    if quiet {
        println!("{}", SessionFormatter::format(&report.session));
    }

    match (&report.saved_as, &report.storage_error) {
        (Some(id), _) => println!("\nDiscussion saved as session {id}"),
        (None, Some(error)) => warn!("Discussion finished but could not be saved: {error}"),
        (None, None) => {}
    }

    for abstention in &report.abstentions {
        info!(
            "{} abstained during the {} round",
            abstention.role, abstention.round
        );
    }

    Ok(())
}

async fn list(store: &dyn SessionStore) -> Result<()> {
    let summaries = store.list().await.context("Could not list sessions")?;
    println!("{}", SessionFormatter::format_list(&summaries));
    Ok(())
}

async fn replay(store: &dyn SessionStore, id: &str, fast_forward: bool) -> Result<()> {
    let session = store
        .load(id)
        .await
        .with_context(|| format!("Could not load session {id}"))?;

    let sink = ConsoleSink::new();
    let mut pacer: Box<dyn roundtable_application::ReplayPacer> = if fast_forward {
        Box::new(SkipToConsensus)
    } else {
        Box::new(TerminalPacer)
    };

    ReplaySessionUseCase::execute(&session, &sink, pacer.as_mut());
    Ok(())
}

/// Build the role-to-provider gateway from configuration
///
/// API keys are checked upfront so a missing key fails before any
/// discussion starts, naming every absent variable at once.
fn build_gateway(config: &FileConfig) -> Result<RoleBindings> {
    let timeout = config.request_timeout();

    let mut providers: HashMap<ProviderKind, Arc<dyn ChatProvider>> = HashMap::new();
    let mut missing = Vec::new();

    for kind in config.roles.providers_in_use() {
        let env_name = &config.providers.settings_for(kind).api_key_env;
        match std::env::var(env_name) {
            Ok(key) if !key.trim().is_empty() => {
                let provider: Arc<dyn ChatProvider> = match kind {
                    ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(key, timeout)),
                    ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(key, timeout)),
                    ProviderKind::Gemini => Arc::new(GeminiProvider::new(key, timeout)),
                };
                providers.insert(kind, provider);
            }
            _ => missing.push(format!("{env_name} ({kind})")),
        }
    }

    if !missing.is_empty() {
        bail!(
            "Missing API keys: {}. Set them in your environment before running a discussion.",
            missing.join(", ")
        );
    }

    let mut builder = RoleBindings::builder();
    for role in Role::all() {
        let binding = config.roles.binding_for(role);
        let provider = providers
            .get(&binding.provider)
            .cloned()
            .with_context(|| format!("No client constructed for provider {}", binding.provider))?;
        builder = builder.bind(role, provider, binding.model.clone());
    }

    info!("Role bindings resolved for all four roles");
    Ok(builder.build()?)
}
