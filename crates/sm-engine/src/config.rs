//! Engine configuration.

/// Knobs for one [`Engine`][crate::Engine].
///
/// | Field                 | Default | Effect                                        |
/// |-----------------------|---------|-----------------------------------------------|
/// | `seed`                | `0`     | Mixed with each bot id to seed its `BotRng`   |
/// | `check_affordability` | `true`  | Skip spawns over the bot cap or scrap budget  |
/// | `log_tick_summary`    | `true`  | One `info!` line per tick                     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed:                u64,
    pub check_affordability: bool,
    pub log_tick_summary:    bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed:                0,
            check_affordability: true,
            log_tick_summary:    true,
        }
    }
}
