//! Command implementations for tagcast

pub mod dispatch;
pub mod predict;
