//! `sm-engine` — tick orchestrator for the seamaster bot client.
//!
//! # Tick phases
//!
//! ```text
//! Engine::tick(view):
//!   ⓪ Bootstrap: on the first call only, resolve the spawn policy through the
//!                 loader, cache it, clear stale bindings.
//!   ① Spawn    : every tick, SpawnPolicy::plan → registry lookup →
//!                 ability merge → affordability → id allocation → bind a
//!                 fresh BotPolicy.
//!   ② Action   : every own bot in ascending id order, build AgentContext,
//!                 call BotPolicy::act.  Errors and panics are isolated to
//!                 the bot that raised them.
//!   ③ Cleanup  : every tick except the bootstrap tick, drop bindings whose
//!                 bot is gone, keeping ids spawned this tick.
//!   ④ Emit     : TickResponse { spawn, actions }.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`engine`]    | `Engine` and the phase loop                                |
//! | [`builder`]   | `EngineBuilder`                                            |
//! | [`config`]    | `EngineConfig`                                             |
//! | [`registry`]  | `StrategyRegistry`, `PolicyFactory`                        |
//! | [`spawn`]     | `SpawnSpec`, `SpawnPolicy`, `SpawnPolicyLoader`            |
//! | [`script`]    | `ScriptedSpawnPolicy`, `ScriptLoader` (TOML spawn rules)   |
//! | [`response`]  | `TickResponse`, `SpawnPayload`                             |
//! | [`observer`]  | `EngineObserver`, `NoopObserver`                           |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut registry = StrategyRegistry::new();
//! sm_archetypes::register_builtins(&mut registry);
//!
//! let mut engine = EngineBuilder::new(guide)
//!     .registry(registry)
//!     .spawn_loader(ScriptLoader::new("spawn.toml"))
//!     .build()?;
//!
//! let response = engine.tick(&view, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod registry;
pub mod response;
pub mod script;
pub mod spawn;


pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use registry::{PolicyFactory, StrategyRegistry};
pub use response::{SpawnPayload, TickResponse};
pub use script::{ScriptLoader, ScriptedSpawnPolicy};
pub use spawn::{SpawnPolicy, SpawnPolicyLoader, SpawnSpec};
