//! Shared building blocks for `netexpand`: the subnet model, its errors and
//! the run configuration used by the front ends.

pub mod config;
pub mod error;
pub mod network;
