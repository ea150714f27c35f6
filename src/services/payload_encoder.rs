//! Payload encoder for ScanKit.
//!
//! Builds the exact wire syntax the decoder's patterns expect, from
//! structured form input. Pure and total — re-run on every form change to
//! produce the preview payload. Free-text subject/body fields are
//! percent-encoded; everything else is interpolated verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::services::barcode_validator::calculate_checksum;
use crate::types::barcode::BarcodeFormat;

/// Escape set equivalent to JavaScript's `encodeURIComponent`: everything
/// but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a free-text component for embedding in a URI query.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Structured form input for one generated code, one variant per
/// generator form. Field names follow the forms, not the parsed records —
/// the two meet only through the wire syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeRequest {
    Url {
        url: String,
    },
    Text {
        text: String,
    },
    Phone {
        number: String,
    },
    Sms {
        number: String,
        message: String,
    },
    Email {
        to: String,
        subject: String,
        body: String,
    },
    Geo {
        latitude: f64,
        longitude: f64,
    },
    Wifi {
        ssid: String,
        password: String,
        security: String,
        hidden: bool,
    },
    Contact {
        name: String,
        phone: String,
        email: String,
        organization: String,
        address: String,
    },
    Calendar {
        title: String,
        /// ISO datetime-local input, e.g. `2025-11-08T09:00`.
        start: String,
        end: String,
        location: String,
        description: String,
    },
    Barcode {
        format: BarcodeFormat,
        value: String,
    },
}

/// Builds the text payload to embed in a generated code.
///
/// Inverse of the decoder for round-trippable types: url, text, phone,
/// sms, geo, wifi, vcard, calendar (email modulo percent-encoding of
/// subject/body). For checksum barcode formats, a data-only value gets
/// its checksum digit appended; anything else passes through verbatim
/// (validation is a separate, stricter step).
pub fn encode(request: &EncodeRequest) -> String {
    match request {
        EncodeRequest::Url { url } => url.clone(),
        EncodeRequest::Text { text } => text.clone(),
        EncodeRequest::Phone { number } => format!("tel:{}", number),
        EncodeRequest::Sms { number, message } => {
            format!("sms:{}?body={}", number, encode_component(message))
        }
        EncodeRequest::Email { to, subject, body } => format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode_component(subject),
            encode_component(body)
        ),
        EncodeRequest::Geo {
            latitude,
            longitude,
        } => format!("geo:{},{}", latitude, longitude),
        EncodeRequest::Wifi {
            ssid,
            password,
            security,
            hidden,
        } => format!(
            "WIFI:T:{};S:{};P:{};H:{};;",
            security, ssid, password, hidden
        ),
        EncodeRequest::Contact {
            name,
            phone,
            email,
            organization,
            address,
        } => format!(
            "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL:{}\nEMAIL:{}\nORG:{}\nADR:{}\nEND:VCARD",
            name, phone, email, organization, address
        ),
        EncodeRequest::Calendar {
            title,
            start,
            end,
            location,
            description,
        } => format!(
            "BEGIN:VEVENT\nSUMMARY:{}\nDTSTART:{}\nDTEND:{}\nLOCATION:{}\nDESCRIPTION:{}\nEND:VEVENT",
            title,
            compact_ics(start),
            compact_ics(end),
            location,
            description
        ),
        EncodeRequest::Barcode { format, value } => match format.full_length() {
            Some(full) => calculate_checksum(value, full),
            None => value.clone(),
        },
    }
}

/// Strips `-` and `:` from an ISO datetime-local string to produce the
/// compact ICS timestamp (`2025-11-08T09:00` → `20251108T0900`).
fn compact_ics(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}
