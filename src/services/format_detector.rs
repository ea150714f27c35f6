//! Scan-content type detector: QR code vs. linear barcode.
//!
//! Decides how to re-render scanned content — as a 2D QR code or a 1D
//! barcode, and if the latter, which symbology. Classification is by
//! prefix, length and charset only; it deliberately performs no checksum
//! check. Detection is lossy and heuristic, validation
//! ([`crate::services::barcode_validator`]) is strict — the two must stay
//! separate. A 13-digit string with no scheme prefix classifies as
//! EAN-13 even when it is really a phone number; that ambiguity is
//! inherent to the heuristic.

use crate::types::barcode::{BarcodeFormat, ScanContent};

/// Prefixes (matched case-insensitively) that mark structured QR-only
/// payloads. Anything matching re-renders as a QR code.
const QR_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "mailto:",
    "tel:",
    "sms:",
    "geo:",
    "wifi:",
    "begin:vcard",
    "mecard:",
    "begin:vevent",
    "bitcoin:",
    "ethereum:",
    "coupon:",
    "sku:",
];

/// Classifies raw scanned text for re-rendering.
pub fn detect_scan_content(raw: &str) -> ScanContent {
    if QR_PREFIXES.iter().any(|p| has_prefix_ignore_case(raw, p)) {
        return ScanContent {
            is_barcode: false,
            format: BarcodeFormat::Code128,
        };
    }

    let numeric = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit());
    let format = if numeric {
        match raw.len() {
            13 => BarcodeFormat::Ean13,
            8 => BarcodeFormat::Ean8,
            12 => BarcodeFormat::Upc,
            14 => BarcodeFormat::Itf14,
            // Numeric content of any other length renders fine as CODE 128.
            _ => BarcodeFormat::Code128,
        }
    } else {
        // Alphanumeric and anything else fall back to CODE 128.
        BarcodeFormat::Code128
    };

    ScanContent {
        is_barcode: true,
        format,
    }
}

fn has_prefix_ignore_case(raw: &str, prefix: &str) -> bool {
    raw.len() >= prefix.len()
        && raw.is_char_boundary(prefix.len())
        && raw[..prefix.len()].eq_ignore_ascii_case(prefix)
}
