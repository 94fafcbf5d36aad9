// Adapters layer: concrete implementations of the domain ports (storage, output sinks).

pub mod sink;
pub mod storage;
