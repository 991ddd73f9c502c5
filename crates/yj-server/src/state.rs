use std::sync::Arc;

use yj_engine::ReferenceResolver;
use yj_interpret::Interpreter;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    resolver: ReferenceResolver,
    interpreter: Interpreter,
}

impl AppState {
    /// Build the state. Reference data is read lazily on first lookup.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let resolver = ReferenceResolver::new(config.data_path.clone());
        let interpreter = Interpreter::new(config.interpreter.clone())?;
        if !interpreter.config().has_api_key() {
            tracing::warn!("no interpretation API key configured; /api/ai will answer 400");
        }
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver,
                interpreter,
            }),
        })
    }

    /// Server settings.
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Reference text resolver.
    pub fn resolver(&self) -> &ReferenceResolver {
        &self.inner.resolver
    }

    /// Interpretation client.
    pub fn interpreter(&self) -> &Interpreter {
        &self.inner.interpreter
    }
}
