//! Helpers around the training and inference workflow

/// Checkpoint selection by validation metric
pub mod checkpoint;
/// Particle coordinate tables
pub mod particles;
/// Explicit generator seeding
pub mod seeding;
