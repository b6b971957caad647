//! Foundation module - Core utilities and types
//!
//! Fundamental utilities used throughout the crate:
//! - Math types and transforms
//! - Collections and handle arenas
//! - Time management
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
