//! Fluent builder for constructing an [`Engine`].

use std::collections::BTreeMap;
use std::sync::Arc;

use sm_core::IdAllocator;
use sm_spatial::PathHints;

use crate::{Engine, EngineConfig, EngineError, EngineResult, SpawnPolicyLoader, StrategyRegistry};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - `hints`: the path-guide source every bot navigates with.
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                   |
/// |----------------------|-------------------------------------------|
/// | `.config(c)`         | `EngineConfig::default()`                 |
/// | `.registry(r)`       | empty registry                            |
/// | `.spawn_loader(l)`   | none: the first tick fails with `SpawnPolicy` |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(guide)
///     .config(EngineConfig { seed: 7, ..Default::default() })
///     .registry(registry)
///     .spawn_loader(ScriptLoader::new("spawn.toml"))
///     .build()?;
/// ```
pub struct EngineBuilder {
    config:   EngineConfig,
    hints:    Arc<dyn PathHints>,
    registry: StrategyRegistry,
    loader:   Option<Box<dyn SpawnPolicyLoader>>,
}

impl EngineBuilder {
    pub fn new<H: PathHints + 'static>(hints: H) -> Self {
        Self::shared(Arc::new(hints))
    }

    /// Start from a guide already shared with other engines.
    pub fn shared(hints: Arc<dyn PathHints>) -> Self {
        Self {
            config:   EngineConfig::default(),
            hints,
            registry: StrategyRegistry::new(),
            loader:   None,
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Loader resolved on the first tick.
    pub fn spawn_loader<L: SpawnPolicyLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Validate inputs and return an engine that has not yet bootstrapped.
    pub fn build(self) -> EngineResult<Engine> {
        if self.registry.is_empty() {
            return Err(EngineError::Config("no strategies registered".into()));
        }

        Ok(Engine {
            config:       self.config,
            hints:        self.hints,
            registry:     self.registry,
            loader:       self.loader,
            spawn_policy: None,
            bindings:     BTreeMap::new(),
            ids:          IdAllocator::default(),
            bootstrapped: false,
        })
    }
}
