//! The `Engine` struct and its tick phases.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, error, info, warn};

use sm_behavior::{AgentContext, BotPolicy, DynNavigator, Obstacles};
use sm_core::{AbilityCost, BotId, BotRng, IdAllocator, merge_abilities};
use sm_spatial::{Navigator, PathHints};
use sm_world::WorldView;

use crate::{
    EngineConfig, EngineError, EngineObserver, EngineResult, SpawnPayload, SpawnPolicy,
    SpawnPolicyLoader, StrategyRegistry, TickResponse,
};

/// A live bot's policy and the strategy it was spawned as.
pub(crate) struct Binding {
    strategy: String,
    policy:   Box<dyn BotPolicy>,
}

/// The tick orchestrator.
///
/// Holds everything that persists across ticks: the bot-id → policy
/// bindings, the cached spawn policy, the id allocator, and the bootstrap
/// flag.  The caller owns the `Engine` and feeds it one snapshot per tick
/// through [`tick`](Self::tick).
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    pub(crate) config:       EngineConfig,
    pub(crate) hints:        Arc<dyn PathHints>,
    pub(crate) registry:     StrategyRegistry,
    pub(crate) loader:       Option<Box<dyn SpawnPolicyLoader>>,
    pub(crate) spawn_policy: Option<Box<dyn SpawnPolicy>>,
    pub(crate) bindings:     BTreeMap<BotId, Binding>,
    pub(crate) ids:          IdAllocator,
    pub(crate) bootstrapped: bool,
}

impl Engine {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process one snapshot and return this tick's spawns and actions.
    ///
    /// Fatal errors (spawn-policy load failure, unknown strategy, a living
    /// bot without a binding) abort the tick.  Policy errors and panics are
    /// contained to the bot that raised them.
    pub fn tick<O: EngineObserver>(
        &mut self,
        view:     &WorldView,
        observer: &mut O,
    ) -> EngineResult<TickResponse> {
        let now = view.tick;
        observer.on_tick_start(now);

        let bootstrap_tick = !self.bootstrapped;
        if bootstrap_tick {
            self.bootstrap()?;
        }

        self.ids.observe(view.bot_id_seed, view.max_bot_id());
        self.ids.observe(0, self.bindings.keys().next_back().copied());

        let mut response = TickResponse::default();
        let spawned = self.spawn_phase(view, &mut response, observer)?;
        self.action_phase(view, &mut response, observer)?;
        if !bootstrap_tick {
            self.cleanup_phase(view, &spawned, observer);
        }

        if self.config.log_tick_summary {
            info!(
                tick = now.0,
                bots = view.bot_count(),
                bound = self.bindings.len(),
                spawned = response.spawn.len(),
                actions = response.actions.len(),
                "tick complete"
            );
        }
        observer.on_tick_end(now, &response);
        Ok(response)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Ids with a bound policy, ascending.
    pub fn bound_ids(&self) -> impl Iterator<Item = BotId> + '_ {
        self.bindings.keys().copied()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Strategy name bound to `id`.
    pub fn strategy_of(&self, id: BotId) -> Option<&str> {
        self.bindings.get(&id).map(|b| b.strategy.as_str())
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn bootstrap(&mut self) -> EngineResult<()> {
        let Some(loader) = self.loader.take() else {
            error!("no spawn policy loader configured");
            return Err(EngineError::SpawnPolicy("no spawn policy loader configured".into()));
        };
        let policy = loader.load().map_err(|e| {
            error!(error = %e, "spawn policy failed to load");
            match e {
                EngineError::SpawnPolicy(_) => e,
                other => EngineError::SpawnPolicy(other.to_string()),
            }
        })?;

        self.spawn_policy = Some(policy);
        if !self.bindings.is_empty() {
            debug!(stale = self.bindings.len(), "clearing stale bindings");
            self.bindings.clear();
        }
        self.bootstrapped = true;
        debug!("engine bootstrapped");
        Ok(())
    }

    fn spawn_phase<O: EngineObserver>(
        &mut self,
        view:     &WorldView,
        response: &mut TickResponse,
        observer: &mut O,
    ) -> EngineResult<FxHashSet<BotId>> {
        let mut spawned = FxHashSet::default();
        let Some(policy) = self.spawn_policy.as_mut() else {
            return Ok(spawned);
        };

        let specs = policy.plan(view)?;
        let mut budget = view.scraps;
        let mut population = view.bot_count();

        for (index, spec) in specs.iter().enumerate() {
            let Some(defaults) = self.registry.abilities(&spec.strategy) else {
                error!(strategy = %spec.strategy, "spawn requested for unknown strategy");
                return Err(EngineError::UnknownStrategy(spec.strategy.clone()));
            };
            let abilities = merge_abilities(defaults, &spec.extra_abilities);

            if self.config.check_affordability {
                let cost = AbilityCost::of(&abilities).scrap;
                if population >= view.max_bots {
                    debug!(strategy = %spec.strategy, population, cap = view.max_bots, "spawn skipped: bot cap");
                    continue;
                }
                if cost > budget {
                    debug!(strategy = %spec.strategy, cost, budget, "spawn skipped: scrap");
                    continue;
                }
                budget -= cost;
            }
            population += 1;

            let id = self.ids.allocate();
            let rng = BotRng::new(self.config.seed, id);
            let Some(bot_policy) = self.registry.instantiate(&spec.strategy, rng) else {
                return Err(EngineError::UnknownStrategy(spec.strategy.clone()));
            };

            self.bindings.insert(
                id,
                Binding { strategy: spec.strategy.clone(), policy: bot_policy },
            );
            response.spawn.insert(id, SpawnPayload { abilities, location: spec.location });
            spawned.insert(id);
            policy.on_spawned(index, id, view.tick);
            observer.on_spawn(view.tick, id, &spec.strategy);
            debug!(bot = %id, strategy = %spec.strategy, location = %spec.location, "bot spawned");
        }
        Ok(spawned)
    }

    fn action_phase<O: EngineObserver>(
        &mut self,
        view:     &WorldView,
        response: &mut TickResponse,
        observer: &mut O,
    ) -> EngineResult<()> {
        let hints: &dyn PathHints = &*self.hints;
        let nav: DynNavigator<'_> = Navigator::new(hints, view.bounds());
        let obstacles = Obstacles::from_view(view);

        for bot in view.own_bots() {
            let Some(binding) = self.bindings.get_mut(&bot.id) else {
                error!(bot = %bot.id, "living bot has no bound policy");
                return Err(EngineError::UnboundBot(bot.id));
            };

            let ctx = AgentContext::new(view, bot, &nav, &obstacles, binding.policy.avoid_own_bots());
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| binding.policy.act(&ctx)));

            let failure = match outcome {
                Ok(Ok(Some(action))) => {
                    response.actions.insert(bot.id, action);
                    None
                }
                Ok(Ok(None)) => None,
                Ok(Err(e)) => Some(e.to_string()),
                Err(payload) => Some(format!("panicked: {}", panic_message(&*payload))),
            };

            if let Some(reason) = failure {
                warn!(bot = %bot.id, strategy = %binding.strategy, error = %reason, "policy failed; no action this tick");
                observer.on_bot_error(view.tick, bot.id, &reason);
            }
        }
        Ok(())
    }

    fn cleanup_phase<O: EngineObserver>(
        &mut self,
        view:     &WorldView,
        spawned:  &FxHashSet<BotId>,
        observer: &mut O,
    ) {
        let dead: Vec<BotId> = self
            .bindings
            .keys()
            .copied()
            .filter(|id| !view.contains_bot(*id) && !spawned.contains(id))
            .collect();

        for id in dead {
            if let Some(binding) = self.bindings.remove(&id) {
                debug!(bot = %id, strategy = %binding.strategy, "binding removed");
            }
            observer.on_bot_removed(view.tick, id);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
