//! State Management

pub mod global;

pub use global::{provide_global_state, use_global_state, GlobalState};
