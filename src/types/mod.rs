// ScanKit shared type definitions
// Each submodule defines types used across the codec and storage layers.

pub mod barcode;
pub mod errors;
pub mod payload;
pub mod saved;
