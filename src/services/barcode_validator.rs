//! EAN/UPC checksum validation and computation.
//!
//! EAN-13, EAN-8 and UPC-A carry a trailing mod-10 weighted checksum
//! digit. Counting from the right end of the data digits, every digit at
//! an even 0-indexed distance is weighted 3, the rest 1; the checksum is
//! `(10 - sum mod 10) mod 10`. The same digit routine backs both
//! validation and computation, so encoding a data-only value and then
//! validating the result always succeeds.

use crate::types::barcode::{BarcodeFormat, BarcodeValidation};
use crate::types::errors::BarcodeError;

/// Characters CODE 39 can encode.
const CODE39_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-. $/+%";

/// Computes the mod-10 checksum digit over a digit string.
/// `None` if any character is not an ASCII digit.
fn checksum_digit(data: &str) -> Option<u32> {
    let mut sum = 0u32;
    for (i, c) in data.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        sum += if i % 2 == 0 { digit * 3 } else { digit };
    }
    Some((10 - sum % 10) % 10)
}

/// Checks the trailing checksum digit of a full-length value.
///
/// Returns `false` for non-digit input or a length other than the
/// format's full length. Formats without a checksum digit always pass.
pub fn validate_checksum(value: &str, format: BarcodeFormat) -> bool {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let Some(full) = format.full_length() else {
        return true;
    };
    if value.len() != full {
        return false;
    }
    let (data, provided) = value.split_at(full - 1);
    match (checksum_digit(data), provided.chars().next()) {
        (Some(expected), Some(c)) => c.to_digit(10) == Some(expected),
        _ => false,
    }
}

/// Appends the checksum digit to a data-only value.
///
/// No-op unless the value is exactly one digit short of `full_length`
/// and all digits — this is the sanctioned auto-calculation path, and
/// anything else is left for validation to reject.
pub fn calculate_checksum(data: &str, full_length: usize) -> String {
    if full_length == 0 || data.len() != full_length - 1 {
        return data.to_string();
    }
    match checksum_digit(data) {
        Some(digit) => format!("{}{}", data, digit),
        None => data.to_string(),
    }
}

/// Validates user input for a barcode format before rendering or encoding.
///
/// For the checksum family, the data-only length (one digit short)
/// succeeds and yields a `final_value` with the checksum appended; the
/// full length must carry a correct checksum digit.
pub fn validate_barcode(value: &str, format: BarcodeFormat) -> BarcodeValidation {
    if value.trim().is_empty() {
        return BarcodeValidation::rejected(BarcodeError::Empty);
    }
    if format.is_numeric() && !value.chars().all(|c| c.is_ascii_digit()) {
        return BarcodeValidation::rejected(BarcodeError::NonNumeric(format));
    }

    match format {
        BarcodeFormat::Ean13 | BarcodeFormat::Ean8 | BarcodeFormat::Upc => {
            let full = match format {
                BarcodeFormat::Ean13 => 13,
                BarcodeFormat::Ean8 => 8,
                _ => 12,
            };
            if value.len() < full - 1 || value.len() > full {
                return BarcodeValidation::rejected(BarcodeError::WrongLength {
                    format,
                    actual: value.len(),
                });
            }
            if value.len() == full && !validate_checksum(value, format) {
                return BarcodeValidation::rejected(BarcodeError::ChecksumMismatch(format));
            }
            BarcodeValidation::ok(calculate_checksum(value, full))
        }
        BarcodeFormat::Itf14 => {
            if value.len() != 14 {
                return BarcodeValidation::rejected(BarcodeError::WrongLength {
                    format,
                    actual: value.len(),
                });
            }
            BarcodeValidation::ok(value.to_string())
        }
        BarcodeFormat::Code39 => {
            if !value.chars().all(|c| CODE39_CHARSET.contains(c)) {
                return BarcodeValidation::rejected(BarcodeError::CharsetViolation(format));
            }
            BarcodeValidation::ok(value.to_string())
        }
        // CODE 128 delegates charset concerns to the renderer.
        BarcodeFormat::Code128 => BarcodeValidation::ok(value.to_string()),
    }
}
