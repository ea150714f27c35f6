//! ScanKit — payload codec for QR/barcode scanner-generator apps.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod database;
pub mod managers;
pub mod services;
pub mod types;
