//! Orchestrator - main simulation loop
//!
//! Implements the per-tick algorithm integrating all yard components.
//!
//! See `engine.rs` for the tick loop and `presets.rs` for canned
//! scenario/strategy presets and the example-run helper.

pub mod engine;
pub mod presets;

// Re-export main types for convenience
pub use engine::{
    CheckpointCapacities, CheckpointSnapshot, DepartureConfig, EngineConfig, NextDeparture,
    ScenarioConfig, SeedCounts, SimulationError, StrategyConfig, TickResult, YardEngine,
    YardSnapshot,
};
pub use presets::{run_example, Example, ExampleRun, PresetScenario, DEFAULT_TICK_MINUTES};
