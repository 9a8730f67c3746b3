//! Python bindings (enabled via the `pyo3` feature)
//!
//! Thin wrappers over the Rust engine. Configuration, events, and snapshots
//! cross the boundary as JSON strings; the Python side deserializes with the
//! standard library. No simulation logic lives here.

mod engine;

pub use engine::PyYardEngine;

use pyo3::prelude::*;
use pyo3::types::PyModule;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyYardEngine>()?;
    m.add("URGENCY_WINDOW_MINUTES", crate::urgency::URGENCY_WINDOW_MINUTES)?;
    m.add(
        "DEFAULT_TICK_MINUTES",
        crate::orchestrator::DEFAULT_TICK_MINUTES,
    )?;
    Ok(())
}
