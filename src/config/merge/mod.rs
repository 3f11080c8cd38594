//! Merge policy and orchestration for config sources.

pub mod merge_policy;
pub mod service;
