//! Integration tests for the sasphere-rs library
//!
//! These tests drive the kernels, the model adapter and the descriptor through
//! the public API, the way a fitting host would.

// Reference scenarios shipped with the model
pub mod oracle_scenarios;

// Host-side evaluation through the ScatteringModel trait
pub mod model_evaluation;

// Descriptor export consumed by the host registry
pub mod descriptor_export;
