//! coach-api server binary.

use std::error::Error;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coach_api::adapters::ai::{OpenAIConfig, OpenAIProvider};
use coach_api::adapters::auth::{JwtAccessTokens, JwtConfig};
use coach_api::adapters::http::{api_router, with_server_layers, AppState};
use coach_api::adapters::memory::{
    InMemoryClientStore, InMemoryCredentialStore, InMemoryPlanStore, InMemorySessionStore,
};
use coach_api::adapters::postgres::{
    self, PostgresClientStore, PostgresCredentialStore, PostgresPlanStore, PostgresSessionStore,
};
use coach_api::adapters::SystemClock;
use coach_api::application::handlers::{AdminCredentials, AuthGate, ChatHandler, ChatSettings};
use coach_api::application::repositories::{ClientRepository, PlanRepository, SessionRepository};
use coach_api::config::{AiConfig, AppConfig, ServerConfig, StorageBackend, StorageConfig};
use coach_api::domain::foundation::{DomainError, TenantId};
use coach_api::ports::{ClientStore, Clock, CredentialStore, PlanStore, SessionStore};

/// Storage handles for the selected backend.
struct Stores {
    clients: Arc<dyn ClientStore>,
    sessions: Arc<dyn SessionStore>,
    plans: Arc<dyn PlanStore>,
    credentials: Arc<dyn CredentialStore>,
}

async fn open_stores(config: &StorageConfig) -> Result<Stores, DomainError> {
    match config.backend {
        StorageBackend::Memory => Ok(Stores {
            clients: Arc::new(InMemoryClientStore::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
            plans: Arc::new(InMemoryPlanStore::new()),
            credentials: Arc::new(InMemoryCredentialStore::new()),
        }),
        StorageBackend::Postgres => {
            let pool = postgres::connect(config).await?;
            if config.run_migrations {
                postgres::run_migrations(&pool).await?;
                info!("database migrations applied");
            }
            Ok(Stores {
                clients: Arc::new(PostgresClientStore::new(pool.clone())),
                sessions: Arc::new(PostgresSessionStore::new(pool.clone())),
                plans: Arc::new(PostgresPlanStore::new(pool.clone())),
                credentials: Arc::new(PostgresCredentialStore::new(pool)),
            })
        }
    }
}

fn chat_provider(config: &AiConfig) -> Result<OpenAIProvider, Box<dyn Error>> {
    let provider_config = match &config.api_key {
        Some(key) if config.is_configured() => OpenAIConfig::new(key.expose_secret().clone()),
        _ => OpenAIConfig::unconfigured(),
    }
    .with_model(config.model.clone())
    .with_base_url(config.base_url.clone())
    .with_timeout(config.timeout());

    if !provider_config.is_configured() {
        tracing::warn!("no chat API key configured; /chat will return errors");
    }
    Ok(OpenAIProvider::new(provider_config)?)
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.environment.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                error!(error = %e, "failed to register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let stores = open_stores(&config.storage).await?;

    let clients = Arc::new(ClientRepository::new(stores.clients, clock.clone()));
    let sessions = Arc::new(SessionRepository::new(stores.sessions, clients.clone(), clock.clone()));
    let plans = Arc::new(PlanRepository::new(stores.plans, clock.clone()));

    let auth_config = &config.auth;
    let tokens = JwtAccessTokens::new(
        JwtConfig::new(
            auth_config.token_secret.expose_secret().clone(),
            auth_config.issuer.clone(),
            auth_config.token_expiry_days,
        ),
        clock.clone(),
    );
    let admin = AdminCredentials::new(
        auth_config.admin_username.clone(),
        auth_config.admin_password.expose_secret().clone(),
    );
    let auth = Arc::new(AuthGate::new(admin, stores.credentials, Arc::new(tokens)));

    let settings = ChatSettings {
        max_tokens: config.ai.max_tokens,
        temperature: config.ai.temperature,
        ..ChatSettings::default()
    };
    let chat = Arc::new(ChatHandler::new(Arc::new(chat_provider(&config.ai)?), settings));

    let state = AppState {
        clients,
        sessions,
        plans,
        auth,
        chat,
        tenant: TenantId::new(auth_config.tenant.clone())?,
    };
    let app = with_server_layers(api_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, backend = ?config.storage.backend, "coach-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("coach-api stopped");
    Ok(())
}
