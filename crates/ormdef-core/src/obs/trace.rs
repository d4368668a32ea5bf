//! Definition build tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect the
//! definition produced.

use crate::schema::SkipReason;

///
/// DefinitionTraceSink
///

pub trait DefinitionTraceSink {
    fn on_event(&self, event: DefinitionTraceEvent<'_>);
}

///
/// DefinitionTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefinitionTraceEvent<'a> {
    Start {
        model: &'a str,
        attributes: usize,
    },
    Skipped {
        model: &'a str,
        attribute: &'a str,
        reason: SkipReason,
    },
    Mapped {
        model: &'a str,
        attribute: &'a str,
        required: bool,
    },
    Failed {
        model: &'a str,
        attribute: &'a str,
    },
    Finish {
        model: &'a str,
        properties: usize,
        required: usize,
    },
}

impl DefinitionTraceEvent<'_> {
    #[must_use]
    pub const fn model(&self) -> &str {
        match self {
            Self::Start { model, .. }
            | Self::Skipped { model, .. }
            | Self::Mapped { model, .. }
            | Self::Failed { model, .. }
            | Self::Finish { model, .. } => *model,
        }
    }
}

// emit
// no-op without a sink
pub(crate) fn emit(sink: Option<&dyn DefinitionTraceSink>, event: DefinitionTraceEvent<'_>) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
