//! Command Handlers Module

pub mod detect;
