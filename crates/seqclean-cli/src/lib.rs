//! Library surface of the seqclean CLI, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
