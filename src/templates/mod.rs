pub mod snapshot;

pub use snapshot::SNAPSHOT_TEMPLATE;
