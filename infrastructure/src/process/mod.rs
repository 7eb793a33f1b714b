//! OS process adapters

mod spawner;

pub use spawner::ProcessWorkerSpawner;
