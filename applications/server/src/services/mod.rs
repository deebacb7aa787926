/// Server services
pub mod integrity;
pub mod ordering;

pub use integrity::IntegrityCoordinator;
pub use ordering::OrderingEngine;
