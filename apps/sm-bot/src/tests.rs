use sm_archetypes::register_builtins;
use sm_engine::{
    Engine, EngineBuilder, EngineConfig, EngineResult, ScriptedSpawnPolicy, SpawnPolicy,
    StrategyRegistry,
};
use sm_spatial::testkit::open_grid;

use crate::driver::{ErrorTally, run};

const SCRIPT: &str = "[[rule]]\nstrategy = \"saboteur\"\nlocation = 2\n";

fn engine() -> Engine {
    let mut registry = StrategyRegistry::new();
    register_builtins(&mut registry);
    EngineBuilder::new(open_grid(6, 6))
        .config(EngineConfig { log_tick_summary: false, ..EngineConfig::default() })
        .registry(registry)
        .spawn_loader(|| -> EngineResult<Box<dyn SpawnPolicy>> {
            Ok(Box::new(ScriptedSpawnPolicy::from_toml_str(SCRIPT)?))
        })
        .build()
        .unwrap()
}

#[test]
fn one_response_line_per_snapshot() {
    let input = concat!(
        r#"{"tick":0,"scraps":50,"max_bots":5,"width":6,"height":6}"#, "\n",
        "\n",
        "not json\n",
        r#"{"tick":1,"scraps":45,"max_bots":5,"width":6,"height":6,"bots":{"1":{"id":1,"location":{"x":2,"y":0},"energy":50}}}"#, "\n",
    );
    let mut out = Vec::new();
    let mut tally = ErrorTally::default();

    let ticks = run(&mut engine(), input.as_bytes(), &mut out, &mut tally).unwrap();

    assert_eq!(ticks, 2);
    assert_eq!(tally.skipped_lines, 1);
    assert_eq!(tally.bot_errors, 0);
    let lines: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"spawn":{"1":{"abilities":["SELF_DESTRUCT"],"location":{"x":2,"y":0}}},"actions":{}}"#,
            r#"{"spawn":{},"actions":{}}"#,
            r#"{"spawn":{},"actions":{"1":{"action":"MOVE","direction":"NORTH"}}}"#,
        ]
    );
}

#[test]
fn engine_error_ends_run() {
    let input = concat!(
        r#"{"tick":0,"max_bots":5,"width":6,"height":6,"bots":{"9":{"id":9,"location":{"x":0,"y":0}}}}"#,
        "\n",
    );
    let mut out = Vec::new();
    let err = run(&mut engine(), input.as_bytes(), &mut out, &mut ErrorTally::default()).unwrap_err();
    assert!(err.to_string().contains("tick"));
    assert!(out.is_empty());
}
