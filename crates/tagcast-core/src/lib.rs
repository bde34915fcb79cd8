//! Tagcast Core Library
//!
//! Predicts short-form video engagement (views, likes, comments) from
//! content tags with a k-nearest-neighbour search over a static catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod knn;
pub mod logging;
pub mod records;
pub mod similarity;
