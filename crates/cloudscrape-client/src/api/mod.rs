//! API endpoint implementations.

mod executions;
mod runs;

pub use executions::ExecutionsApi;
pub use runs::{ListExecutionsQuery, RunsApi};
