use serde::{Deserialize, Serialize};

use crate::types::errors::BarcodeError;

/// Linear barcode symbologies the generator can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BarcodeFormat {
    Code128,
    Ean13,
    Ean8,
    Upc,
    Code39,
    Itf14,
}

impl BarcodeFormat {
    /// Wire name, as the rendering library and the detector report it.
    pub fn as_str(self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Ean13 => "EAN13",
            BarcodeFormat::Ean8 => "EAN8",
            BarcodeFormat::Upc => "UPC",
            BarcodeFormat::Code39 => "CODE39",
            BarcodeFormat::Itf14 => "ITF14",
        }
    }

    /// Display name used in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE 128",
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Ean8 => "EAN-8",
            BarcodeFormat::Upc => "UPC",
            BarcodeFormat::Code39 => "CODE 39",
            BarcodeFormat::Itf14 => "ITF-14",
        }
    }

    /// Whether the format accepts digits only.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            BarcodeFormat::Ean13 | BarcodeFormat::Ean8 | BarcodeFormat::Upc | BarcodeFormat::Itf14
        )
    }

    /// Full (checksum-included) length for the mod-10 checksum family.
    /// `None` for formats without a trailing checksum digit.
    pub fn full_length(self) -> Option<usize> {
        match self {
            BarcodeFormat::Ean13 => Some(13),
            BarcodeFormat::Ean8 => Some(8),
            BarcodeFormat::Upc => Some(12),
            _ => None,
        }
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BarcodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CODE128" => Ok(BarcodeFormat::Code128),
            "EAN13" => Ok(BarcodeFormat::Ean13),
            "EAN8" => Ok(BarcodeFormat::Ean8),
            "UPC" => Ok(BarcodeFormat::Upc),
            "CODE39" => Ok(BarcodeFormat::Code39),
            "ITF14" => Ok(BarcodeFormat::Itf14),
            other => Err(format!("Unknown barcode format: {}", other)),
        }
    }
}

/// Rendering decision for scanned content: 2D QR code or 1D barcode, and
/// if the latter, which symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanContent {
    pub is_barcode: bool,
    pub format: BarcodeFormat,
}

/// Outcome of validating user input for a barcode format before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeValidation {
    pub is_valid: bool,
    pub error: Option<BarcodeError>,
    /// On success: the value to render — the input verbatim, or the input
    /// with the computed checksum digit appended when it was submitted in
    /// data-only form.
    pub final_value: Option<String>,
}

impl BarcodeValidation {
    pub fn ok(final_value: String) -> Self {
        Self {
            is_valid: true,
            error: None,
            final_value: Some(final_value),
        }
    }

    pub fn rejected(error: BarcodeError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            final_value: None,
        }
    }

    /// User-facing message for a failed validation, empty when valid.
    pub fn message(&self) -> String {
        match &self.error {
            Some(err) => err.to_string(),
            None => String::new(),
        }
    }
}
