//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the importer:
//! - Color math types
//! - Arena keys for material storage
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
