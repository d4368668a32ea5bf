use crate::obs::{DefinitionTraceEvent, DefinitionTraceSink};
use std::cell::RefCell;

///
/// RecordingSink
/// Flattens trace events into short strings for order assertions.
///

#[derive(Default)]
pub(crate) struct RecordingSink {
    events: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl DefinitionTraceSink for RecordingSink {
    fn on_event(&self, event: DefinitionTraceEvent<'_>) {
        let line = match event {
            DefinitionTraceEvent::Start { model, attributes } => {
                format!("start {model} {attributes}")
            }
            DefinitionTraceEvent::Skipped {
                attribute, reason, ..
            } => format!("skipped {attribute} {reason:?}"),
            DefinitionTraceEvent::Mapped {
                attribute,
                required,
                ..
            } => {
                if required {
                    format!("mapped {attribute} required")
                } else {
                    format!("mapped {attribute}")
                }
            }
            DefinitionTraceEvent::Failed { attribute, .. } => format!("failed {attribute}"),
            DefinitionTraceEvent::Finish {
                model,
                properties,
                required,
            } => format!("finish {model} {properties}/{required}"),
        };

        self.events.borrow_mut().push(line);
    }
}
