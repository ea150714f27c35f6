//! Payload classifier/decoder for ScanKit.
//!
//! Turns raw decoded text from a scan into a [`ParsedCode`]: a structured,
//! typed record of the payload's fields. Total function — classification
//! never fails; anything unrecognized degrades to plain text. A scanner
//! must never crash on unexpected content, so every extractor treats
//! "pattern not found" as "field absent" rather than as an error.

use chrono::{DateTime, TimeZone, Utc};
use percent_encoding::percent_decode_str;

use crate::types::payload::{
    CalendarEvent, CodePayload, ContactCard, Coupon, CryptoPayment, DeepLink, EmailMessage,
    GeoLocation, MeCardContact, ParsedCode, PhoneNumber, PlainText, ProductInfo, SmsMessage,
    SocialLink, WebLink, WifiNetwork,
};

/// Coin schemes recognized as crypto payment URIs (matched case-insensitively).
const CRYPTO_COINS: &[&str] = &["bitcoin", "ethereum", "litecoin"];

/// Domains whose links classify as social media profiles.
const SOCIAL_DOMAINS: &[&str] = &[
    "instagram.com",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
];

/// Decodes raw scanned text into a structured payload.
///
/// Classification is first-match-wins in a fixed order — some patterns
/// are prefixes of others (`sms:` vs generic schemes) or nested inside
/// URI schemes (social domains inside `https://` links), so the order is
/// part of the contract.
pub fn decode(raw: &str) -> ParsedCode {
    ParsedCode {
        raw_data: raw.to_string(),
        payload: classify(raw),
    }
}

fn classify(raw: &str) -> CodePayload {
    if raw.starts_with("WIFI:") {
        return CodePayload::Wifi(parse_wifi(raw));
    }
    if raw.starts_with("BEGIN:VCARD") {
        return CodePayload::Vcard(parse_vcard(raw));
    }
    if let Some(rest) = raw.strip_prefix("MECARD:") {
        return CodePayload::Mecard(parse_mecard(rest));
    }
    if raw.starts_with("BEGIN:VEVENT") {
        return CodePayload::Calendar(parse_calendar(raw));
    }
    if let Some(rest) = raw.strip_prefix("tel:") {
        return CodePayload::Phone(PhoneNumber {
            number: rest.to_string(),
        });
    }
    if let Some(rest) = raw.strip_prefix("sms:") {
        return CodePayload::Sms(parse_sms(rest));
    }
    if let Some(rest) = raw.strip_prefix("mailto:") {
        return CodePayload::Email(parse_email(rest));
    }
    if let Some(rest) = raw.strip_prefix("geo:") {
        return CodePayload::Geo(parse_geo(rest));
    }
    if let Some(payment) = parse_crypto(raw) {
        return CodePayload::Crypto(payment);
    }
    if raw.starts_with("COUPON:") {
        return CodePayload::Coupon(parse_coupon(raw));
    }
    if raw.starts_with("SKU:") {
        return CodePayload::Sku(parse_sku(raw));
    }
    if is_social(raw) {
        return CodePayload::Social(SocialLink {
            url: raw.to_string(),
        });
    }
    if let Some(scheme) = deep_link_scheme(raw) {
        return CodePayload::Deeplink(DeepLink {
            scheme: scheme.to_string(),
            url: raw.to_string(),
        });
    }
    if is_web_url(raw) {
        return CodePayload::Url(WebLink {
            url: raw.to_string(),
        });
    }
    CodePayload::Text(PlainText {
        text: raw.to_string(),
    })
}

// ─── Shared extractors ───

/// Extracts the value of a `KEY:value;` pair: first occurrence of the key
/// anywhere in the payload, value runs up to the next `;` (or the end).
/// An empty value counts as absent.
fn pair_value<'a>(data: &'a str, key: &str) -> Option<&'a str> {
    let start = data.find(key)? + key.len();
    let rest = &data[start..];
    let value = match rest.find(';') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Percent-decodes a query parameter value. Invalid UTF-8 sequences are
/// replaced rather than rejected.
fn percent_decode(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Looks up a `key=value` pair in a query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
        .filter(|v| !v.is_empty())
}

/// Case-insensitive ASCII prefix test that is safe on multi-byte input.
fn has_prefix_ignore_case(raw: &str, prefix: &str) -> bool {
    raw.len() >= prefix.len()
        && raw.is_char_boundary(prefix.len())
        && raw[..prefix.len()].eq_ignore_ascii_case(prefix)
}

// ─── Per-type parsers ───

fn parse_wifi(data: &str) -> WifiNetwork {
    WifiNetwork {
        ssid: pair_value(data, "S:").unwrap_or_default().to_string(),
        password: pair_value(data, "P:").unwrap_or_default().to_string(),
        security: pair_value(data, "T:").unwrap_or("Open").to_string(),
        hidden: pair_value(data, "H:") == Some("true"),
        eap_method: pair_value(data, "E:").map(str::to_string),
    }
}

fn parse_vcard(data: &str) -> ContactCard {
    let mut card = ContactCard::default();
    for line in data.lines() {
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix("N:") {
            // N is `last;first`; FN below overrides the joined form.
            let mut parts = rest.split(';');
            let last = parts.next().unwrap_or_default();
            let first = parts.next().unwrap_or_default();
            card.last_name = Some(last.to_string());
            card.first_name = Some(first.to_string());
            card.full_name = Some(format!("{} {}", first, last).trim().to_string());
        } else if let Some(rest) = line.strip_prefix("FN:") {
            card.full_name = Some(rest.to_string());
        } else if line.starts_with("TEL") {
            card.phone = after_colon(line);
        } else if line.starts_with("EMAIL") {
            card.email = after_colon(line);
        } else if line.starts_with("ADR") {
            card.address = after_colon(line);
        } else if let Some(rest) = line.strip_prefix("ORG:") {
            card.organization = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix("TITLE:") {
            card.title = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix("URL:") {
            card.url = Some(rest.to_string());
        }
    }
    card
}

/// Everything after the first colon on a property line, e.g.
/// `TEL;TYPE=CELL:+1555` → `+1555`.
fn after_colon(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, value)| value.to_string())
}

fn parse_mecard(data: &str) -> MeCardContact {
    MeCardContact {
        name: pair_value(data, "N:").unwrap_or_default().to_string(),
        phone: pair_value(data, "TEL:").unwrap_or_default().to_string(),
        email: pair_value(data, "EMAIL:").unwrap_or_default().to_string(),
        address: pair_value(data, "ADR:").unwrap_or_default().to_string(),
        url: pair_value(data, "URL:").unwrap_or_default().to_string(),
    }
}

fn parse_calendar(data: &str) -> CalendarEvent {
    let mut event = CalendarEvent::default();
    for line in data.lines() {
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix("SUMMARY:") {
            event.title = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("DTSTART:") {
            event.start = parse_ics_timestamp(rest);
        } else if let Some(rest) = line.strip_prefix("DTEND:") {
            event.end = parse_ics_timestamp(rest);
        } else if let Some(rest) = line.strip_prefix("LOCATION:") {
            event.location = rest.to_string();
        } else if let Some(rest) = line.strip_prefix("DESCRIPTION:") {
            event.description = rest.to_string();
        }
    }
    event
}

/// Parses a compact ICS timestamp (`YYYYMMDDTHHMMSSZ`, seconds optional)
/// by fixed character offsets into a UTC instant.
fn parse_ics_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let year: i32 = value.get(0..4)?.parse().ok()?;
    let month: u32 = value.get(4..6)?.parse().ok()?;
    let day: u32 = value.get(6..8)?.parse().ok()?;
    let hour: u32 = value.get(9..11)?.parse().ok()?;
    let minute: u32 = value.get(11..13)?.parse().ok()?;
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

fn parse_sms(rest: &str) -> SmsMessage {
    let (number, query) = match rest.split_once('?') {
        Some((number, query)) => (number, Some(query)),
        None => (rest, None),
    };
    SmsMessage {
        number: number.to_string(),
        body: query
            .and_then(|q| query_param(q, "body"))
            .map(percent_decode)
            .unwrap_or_default(),
    }
}

fn parse_email(rest: &str) -> EmailMessage {
    let (email, query) = match rest.split_once('?') {
        Some((email, query)) => (email, Some(query)),
        None => (rest, None),
    };
    EmailMessage {
        email: email.to_string(),
        subject: query
            .and_then(|q| query_param(q, "subject"))
            .map(percent_decode)
            .unwrap_or_default(),
        body: query
            .and_then(|q| query_param(q, "body"))
            .map(percent_decode)
            .unwrap_or_default(),
    }
}

fn parse_geo(rest: &str) -> GeoLocation {
    let mut parts = rest.split(',');
    GeoLocation {
        latitude: parts
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default(),
        longitude: parts
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default(),
        zoom: parts.next().and_then(|p| p.parse().ok()),
    }
}

fn parse_crypto(raw: &str) -> Option<CryptoPayment> {
    let coin = CRYPTO_COINS
        .iter()
        .find(|coin| has_prefix_ignore_case(raw, &format!("{}:", coin)))?;
    let rest = &raw[coin.len() + 1..];
    let (address, query) = match rest.split_once('?') {
        Some((address, query)) => (address, Some(query)),
        None => (rest, None),
    };
    Some(CryptoPayment {
        coin: coin.to_string(),
        address: address.to_string(),
        amount: query
            .and_then(|q| query_param(q, "amount"))
            .map(str::to_string),
    })
}

fn parse_coupon(data: &str) -> Coupon {
    Coupon {
        code: pair_value(data, "COUPON:").unwrap_or_default().to_string(),
        discount: pair_value(data, "DISCOUNT:")
            .unwrap_or_default()
            .to_string(),
        expiry: pair_value(data, "EXP:").map(str::to_string),
    }
}

fn parse_sku(data: &str) -> ProductInfo {
    ProductInfo {
        sku: pair_value(data, "SKU:").unwrap_or_default().to_string(),
        lot: pair_value(data, "LOT:").unwrap_or_default().to_string(),
        expiry: pair_value(data, "EXP:").map(str::to_string),
    }
}

// ─── Link classification ───

fn is_social(raw: &str) -> bool {
    SOCIAL_DOMAINS.iter().any(|domain| raw.contains(domain))
        || raw.starts_with("whatsapp://")
}

/// Matches `scheme://` where scheme is a letter followed by letters,
/// digits, `+`, `.` or `-`, excluding http/https (those are plain URLs).
fn deep_link_scheme(raw: &str) -> Option<&str> {
    let (scheme, rest) = raw.split_once(':')?;
    if !rest.starts_with("//") {
        return None;
    }
    let mut chars = scheme.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
        return None;
    }
    if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
        return None;
    }
    Some(scheme)
}

fn is_web_url(raw: &str) -> bool {
    has_prefix_ignore_case(raw, "http://")
        || has_prefix_ignore_case(raw, "https://")
        || has_prefix_ignore_case(raw, "www.")
}
