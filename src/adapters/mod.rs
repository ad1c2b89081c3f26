//! Adapters layer - concrete implementations of the ports.

pub mod composer;
pub mod http;
pub mod storage;
