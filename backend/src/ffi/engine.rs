//! PyO3 wrapper for YardEngine

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::orchestrator::{run_example, EngineConfig, Example, YardEngine};

/// Python wrapper for the Rust yard engine
///
/// # Example (from Python)
///
/// ```python
/// import json
/// from yard_simulator_core_rs import YardEngine
///
/// config = {
///     "anchor_minute": 480,
///     "tick_minutes": 5,
///     "scenario": {
///         "arrival_profile": {"Constant": {"per_tick": 3}},
///         "departures": [
///             {"id": "TRAIN_1200", "scheduled_minute": 720, "capacity": 25},
///         ],
///         "disruptions": [],
///         "checkpoint_capacities": {
///             "arrival_confirm": 2,
///             "placement_approval": 2,
///             "staging_approval": 2,
///             "final_loading": 25,
///         },
///         "seed_counts": {"arrival_buffer": 12, "confirmed_waiting": 8, "staged": 20},
///     },
///     "strategy": "Baseline",
/// }
///
/// engine = YardEngine(json.dumps(config))
/// events = json.loads(engine.step(12))
/// snapshot = json.loads(engine.snapshot())
/// print(snapshot["yard"]["staged"])
/// ```
#[pyclass(name = "YardEngine")]
pub struct PyYardEngine {
    inner: YardEngine,
}

fn parse_config(config_json: &str) -> PyResult<EngineConfig> {
    serde_json::from_str(config_json)
        .map_err(|e| PyValueError::new_err(format!("malformed engine config: {}", e)))
}

#[pymethods]
impl PyYardEngine {
    /// Create an engine from a JSON-encoded configuration
    ///
    /// Raises ValueError on malformed JSON or an invalid configuration.
    #[new]
    fn new(config_json: &str) -> PyResult<Self> {
        let config = parse_config(config_json)?;
        let inner = YardEngine::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyYardEngine { inner })
    }

    /// Reinitialize from a new JSON-encoded configuration
    ///
    /// On failure the current simulation state is left untouched.
    fn reset(&mut self, config_json: &str) -> PyResult<()> {
        let config = parse_config(config_json)?;
        self.inner
            .reset(config)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Advance `n` ticks; returns the produced events as a JSON array string
    fn step(&mut self, n: u64) -> PyResult<String> {
        let events = self
            .inner
            .step(n)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        serde_json::to_string(&events).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Current simulation state as a JSON object string
    fn snapshot(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    fn current_tick(&self) -> u64 {
        self.inner.current_tick()
    }

    fn now_minute(&self) -> u64 {
        self.inner.now_minute()
    }

    /// Tag of the active throughput strategy
    fn strategy_name(&self) -> &'static str {
        self.inner.strategy_name()
    }

    /// Run a canned example by slug; returns the run summary as JSON
    ///
    /// Slugs: `baseline-baseline`, `baseline-urgency`, `surge-baseline`,
    /// `surge-urgency`, `crane-outage`, `train-cancelled`.
    #[staticmethod]
    fn run_example(slug: &str, anchor_minute: u64, hours: u64) -> PyResult<String> {
        let example: Example = slug
            .parse()
            .map_err(|e: crate::orchestrator::SimulationError| {
                PyValueError::new_err(e.to_string())
            })?;
        let run = run_example(example, anchor_minute, hours)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        serde_json::to_string(&run).map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }
}
