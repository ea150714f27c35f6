use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::barcode::BarcodeFormat;

// === BarcodeError ===

/// User-facing barcode validation failures.
///
/// All variants are recoverable — the user corrects the input and
/// validation re-runs on the next change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeError {
    /// The input was empty or whitespace-only.
    Empty,
    /// A digits-only format received non-digit characters.
    NonNumeric(BarcodeFormat),
    /// The input length matches neither the data-only nor the full form.
    WrongLength {
        format: BarcodeFormat,
        actual: usize,
    },
    /// The trailing checksum digit does not match the recomputed value.
    ChecksumMismatch(BarcodeFormat),
    /// The input contains characters outside the format's character set.
    CharsetViolation(BarcodeFormat),
}

impl fmt::Display for BarcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarcodeError::Empty => write!(f, "Please enter a barcode value"),
            BarcodeError::NonNumeric(format) => {
                write!(f, "{} requires only digits", format.as_str())
            }
            BarcodeError::WrongLength { format, actual } => match format {
                BarcodeFormat::Ean13 => {
                    write!(f, "EAN-13 requires 12-13 digits (you have {})", actual)
                }
                BarcodeFormat::Ean8 => {
                    write!(f, "EAN-8 requires 7-8 digits (you have {})", actual)
                }
                BarcodeFormat::Upc => {
                    write!(f, "UPC requires 11-12 digits (you have {})", actual)
                }
                BarcodeFormat::Itf14 => {
                    write!(f, "ITF-14 requires exactly 14 digits (you have {})", actual)
                }
                BarcodeFormat::Code128 | BarcodeFormat::Code39 => {
                    write!(f, "{} requires at least one character", format.display_name())
                }
            },
            BarcodeError::ChecksumMismatch(format) => {
                let data_len = format.full_length().map(|l| l - 1).unwrap_or(0);
                write!(
                    f,
                    "Invalid checksum digit. Enter {} digits to auto-calculate it.",
                    data_len
                )
            }
            BarcodeError::CharsetViolation(format) => match format {
                BarcodeFormat::Code39 => write!(
                    f,
                    "CODE 39 supports uppercase letters, numbers, and symbols (-. $/+%)"
                ),
                _ => write!(
                    f,
                    "{} contains unsupported characters",
                    format.display_name()
                ),
            },
        }
    }
}

impl std::error::Error for BarcodeError {}

// === StorageError ===

/// Errors related to the saved-code history store.
#[derive(Debug)]
pub enum StorageError {
    /// Saved code with the given ID was not found.
    NotFound(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(id) => write!(f, "Saved code not found: {}", id),
            StorageError::DatabaseError(msg) => write!(f, "Saved code database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
