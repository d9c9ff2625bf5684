pub mod session;
pub mod snapshot;
