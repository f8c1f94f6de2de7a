//! Cross-platform core logic: metric catalog, series building, score
//! normalization, and the selection/scroll coordinator. Everything here is
//! renderer-agnostic and unit-tested without Dioxus.

pub mod catalog;
pub mod format;
pub mod photo;
pub mod platform;
pub mod sample;
pub mod score;
pub mod selection;
pub mod series;
pub mod timing;
