//! Configuration and the data carried through a transfer cycle.

pub mod config;
pub mod models;
