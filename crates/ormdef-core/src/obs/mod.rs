//! Observability: caller-injected trace sinks.
//!
//! The core holds no global telemetry state; every event goes to the sink
//! passed into the call that produced it.

pub(crate) mod trace;

pub use trace::{DefinitionTraceEvent, DefinitionTraceSink};
