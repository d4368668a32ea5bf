pub(crate) mod fixtures;
mod sink;

pub(crate) use sink::RecordingSink;
