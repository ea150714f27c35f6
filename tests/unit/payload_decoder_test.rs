//! Unit tests for the payload classifier/decoder.
//!
//! Exercises the full classification order, per-type field extraction,
//! graceful degradation on malformed input, and decode determinism.

use chrono::{TimeZone, Utc};
use rstest::rstest;

use scankit::services::payload_decoder::decode;
use scankit::types::payload::{CodeKind, CodePayload};
use scankit::types::saved::SavedKind;

// ─── Classification order ───

#[rstest]
#[case("WIFI:T:WPA;S:Net;P:pw;;", CodeKind::Wifi)]
#[case("BEGIN:VCARD\nVERSION:3.0\nFN:A\nEND:VCARD", CodeKind::Vcard)]
#[case("MECARD:N:Doe John;;", CodeKind::Mecard)]
#[case("BEGIN:VEVENT\nSUMMARY:X\nEND:VEVENT", CodeKind::Calendar)]
#[case("tel:+15551234567", CodeKind::Phone)]
#[case("sms:+15551234567?body=Hi", CodeKind::Sms)]
#[case("mailto:a@b.com", CodeKind::Email)]
#[case("geo:40.7,-74.0", CodeKind::Geo)]
#[case("bitcoin:1A1zP1eP5QGefi2D", CodeKind::Crypto)]
#[case("ETHEREUM:0xde0b295669", CodeKind::Crypto)]
#[case("COUPON:SAVE20;DISCOUNT:20%;", CodeKind::Coupon)]
#[case("SKU:AB-123;LOT:42;", CodeKind::Sku)]
#[case("https://instagram.com/someone", CodeKind::Social)]
#[case("whatsapp://send?phone=1555", CodeKind::Social)]
#[case("spotify://track/123", CodeKind::Deeplink)]
#[case("https://example.com", CodeKind::Url)]
#[case("HTTP://EXAMPLE.COM", CodeKind::Url)]
#[case("www.example.com", CodeKind::Url)]
#[case("just some random words", CodeKind::Text)]
fn test_classification(#[case] raw: &str, #[case] expected: CodeKind) {
    assert_eq!(decode(raw).kind(), expected, "input: {}", raw);
}

/// Social domains nested inside https:// links must win over the URL rule.
#[test]
fn test_social_checked_before_url() {
    assert_eq!(decode("https://twitter.com/user").kind(), CodeKind::Social);
    assert_eq!(
        decode("https://www.linkedin.com/in/user").kind(),
        CodeKind::Social
    );
}

#[test]
fn test_raw_data_retained_verbatim() {
    let raw = "WIFI:T:WPA;S:Net;P:pw;;";
    assert_eq!(decode(raw).raw_data, raw);
}

// ─── WiFi ───

#[test]
fn test_wifi_fields() {
    let parsed = decode("WIFI:T:WPA;S:MyNet;P:secret;H:false;;");
    match parsed.payload {
        CodePayload::Wifi(wifi) => {
            assert_eq!(wifi.ssid, "MyNet");
            assert_eq!(wifi.password, "secret");
            assert_eq!(wifi.security, "WPA");
            assert!(!wifi.hidden);
            assert_eq!(wifi.eap_method, None);
        }
        other => panic!("expected wifi, got {:?}", other),
    }
}

#[test]
fn test_wifi_hidden_and_eap() {
    let parsed = decode("WIFI:T:WPA2-EAP;S:Corp;P:pw;H:true;E:PEAP;;");
    match parsed.payload {
        CodePayload::Wifi(wifi) => {
            assert!(wifi.hidden);
            assert_eq!(wifi.eap_method.as_deref(), Some("PEAP"));
        }
        other => panic!("expected wifi, got {:?}", other),
    }
}

#[test]
fn test_wifi_defaults_when_fields_absent() {
    let parsed = decode("WIFI:S:OnlyName;;");
    match parsed.payload {
        CodePayload::Wifi(wifi) => {
            assert_eq!(wifi.ssid, "OnlyName");
            assert_eq!(wifi.password, "");
            assert_eq!(wifi.security, "Open");
            assert!(!wifi.hidden);
        }
        other => panic!("expected wifi, got {:?}", other),
    }
}

// ─── Contacts ───

#[test]
fn test_vcard_fields() {
    let raw = "BEGIN:VCARD\nVERSION:3.0\nN:Doe;John\nTEL;TYPE=CELL:+15551234567\n\
               EMAIL:john@example.com\nORG:Acme\nTITLE:Engineer\nURL:https://example.com\nEND:VCARD";
    match decode(raw).payload {
        CodePayload::Vcard(card) => {
            assert_eq!(card.last_name.as_deref(), Some("Doe"));
            assert_eq!(card.first_name.as_deref(), Some("John"));
            assert_eq!(card.full_name.as_deref(), Some("John Doe"));
            assert_eq!(card.phone.as_deref(), Some("+15551234567"));
            assert_eq!(card.email.as_deref(), Some("john@example.com"));
            assert_eq!(card.organization.as_deref(), Some("Acme"));
            assert_eq!(card.title.as_deref(), Some("Engineer"));
            assert_eq!(card.url.as_deref(), Some("https://example.com"));
        }
        other => panic!("expected vcard, got {:?}", other),
    }
}

#[test]
fn test_vcard_fn_overrides_joined_name() {
    let raw = "BEGIN:VCARD\nN:Doe;John\nFN:Johnny D\nEND:VCARD";
    match decode(raw).payload {
        CodePayload::Vcard(card) => assert_eq!(card.full_name.as_deref(), Some("Johnny D")),
        other => panic!("expected vcard, got {:?}", other),
    }
}

#[test]
fn test_vcard_missing_fields_stay_none() {
    match decode("BEGIN:VCARD\nVERSION:3.0\nEND:VCARD").payload {
        CodePayload::Vcard(card) => {
            assert_eq!(card.full_name, None);
            assert_eq!(card.phone, None);
            assert_eq!(card.email, None);
        }
        other => panic!("expected vcard, got {:?}", other),
    }
}

#[test]
fn test_mecard_fields() {
    let raw = "MECARD:N:Doe John;TEL:+1555;EMAIL:a@b.com;ADR:1 Main St;URL:example.com;;";
    match decode(raw).payload {
        CodePayload::Mecard(card) => {
            assert_eq!(card.name, "Doe John");
            assert_eq!(card.phone, "+1555");
            assert_eq!(card.email, "a@b.com");
            assert_eq!(card.address, "1 Main St");
            assert_eq!(card.url, "example.com");
        }
        other => panic!("expected mecard, got {:?}", other),
    }
}

// ─── Calendar ───

#[test]
fn test_calendar_fields_and_dates() {
    let raw = "BEGIN:VEVENT\nSUMMARY:Team Sync\nDTSTART:20251108T090000Z\n\
               DTEND:20251108T100000Z\nLOCATION:HQ\nDESCRIPTION:Weekly\nEND:VEVENT";
    match decode(raw).payload {
        CodePayload::Calendar(event) => {
            assert_eq!(event.title, "Team Sync");
            assert_eq!(
                event.start,
                Some(Utc.with_ymd_and_hms(2025, 11, 8, 9, 0, 0).unwrap())
            );
            assert_eq!(
                event.end,
                Some(Utc.with_ymd_and_hms(2025, 11, 8, 10, 0, 0).unwrap())
            );
            assert_eq!(event.location, "HQ");
            assert_eq!(event.description, "Weekly");
        }
        other => panic!("expected calendar, got {:?}", other),
    }
}

#[test]
fn test_calendar_malformed_date_is_none() {
    match decode("BEGIN:VEVENT\nSUMMARY:X\nDTSTART:soon\nEND:VEVENT").payload {
        CodePayload::Calendar(event) => {
            assert_eq!(event.title, "X");
            assert_eq!(event.start, None);
        }
        other => panic!("expected calendar, got {:?}", other),
    }
}

// ─── URIs ───

#[test]
fn test_phone_number() {
    match decode("tel:+1-555-123-4567").payload {
        CodePayload::Phone(phone) => assert_eq!(phone.number, "+1-555-123-4567"),
        other => panic!("expected phone, got {:?}", other),
    }
}

#[test]
fn test_sms_with_body() {
    match decode("sms:+15551234567?body=Hello%20World").payload {
        CodePayload::Sms(sms) => {
            assert_eq!(sms.number, "+15551234567");
            assert_eq!(sms.body, "Hello World");
        }
        other => panic!("expected sms, got {:?}", other),
    }
}

#[test]
fn test_sms_without_body() {
    match decode("sms:+15551234567").payload {
        CodePayload::Sms(sms) => {
            assert_eq!(sms.number, "+15551234567");
            assert_eq!(sms.body, "");
        }
        other => panic!("expected sms, got {:?}", other),
    }
}

#[test]
fn test_email_subject_and_body_decoded() {
    match decode("mailto:a@b.com?subject=Hi%20there&body=Line%21").payload {
        CodePayload::Email(email) => {
            assert_eq!(email.email, "a@b.com");
            assert_eq!(email.subject, "Hi there");
            assert_eq!(email.body, "Line!");
        }
        other => panic!("expected email, got {:?}", other),
    }
}

#[test]
fn test_email_params_independently_optional() {
    match decode("mailto:a@b.com?body=Only").payload {
        CodePayload::Email(email) => {
            assert_eq!(email.subject, "");
            assert_eq!(email.body, "Only");
        }
        other => panic!("expected email, got {:?}", other),
    }
}

#[test]
fn test_geo_with_zoom() {
    match decode("geo:40.7128,-74.0060,15").payload {
        CodePayload::Geo(geo) => {
            assert_eq!(geo.latitude, 40.7128);
            assert_eq!(geo.longitude, -74.0060);
            assert_eq!(geo.zoom, Some(15.0));
        }
        other => panic!("expected geo, got {:?}", other),
    }
}

#[test]
fn test_geo_unparseable_coordinates_resolve_to_zero() {
    match decode("geo:abc,def").payload {
        CodePayload::Geo(geo) => {
            assert_eq!(geo.latitude, 0.0);
            assert_eq!(geo.longitude, 0.0);
            assert_eq!(geo.zoom, None);
        }
        other => panic!("expected geo, got {:?}", other),
    }
}

#[test]
fn test_crypto_coin_lowercased_with_amount() {
    match decode("BITCOIN:1A1zP1eP5Q?amount=0.5").payload {
        CodePayload::Crypto(payment) => {
            assert_eq!(payment.coin, "bitcoin");
            assert_eq!(payment.address, "1A1zP1eP5Q");
            assert_eq!(payment.amount.as_deref(), Some("0.5"));
        }
        other => panic!("expected crypto, got {:?}", other),
    }
}

#[test]
fn test_deeplink_extracts_scheme() {
    match decode("spotify://track/123").payload {
        CodePayload::Deeplink(link) => {
            assert_eq!(link.scheme, "spotify");
            assert_eq!(link.url, "spotify://track/123");
        }
        other => panic!("expected deeplink, got {:?}", other),
    }
}

// ─── Retail formats ───

#[test]
fn test_coupon_fields() {
    match decode("COUPON:SAVE20;DISCOUNT:20%;EXP:2025-12-31").payload {
        CodePayload::Coupon(coupon) => {
            assert_eq!(coupon.code, "SAVE20");
            assert_eq!(coupon.discount, "20%");
            assert_eq!(coupon.expiry.as_deref(), Some("2025-12-31"));
        }
        other => panic!("expected coupon, got {:?}", other),
    }
}

#[test]
fn test_sku_optional_fields() {
    match decode("SKU:AB-123").payload {
        CodePayload::Sku(product) => {
            assert_eq!(product.sku, "AB-123");
            assert_eq!(product.lot, "");
            assert_eq!(product.expiry, None);
        }
        other => panic!("expected sku, got {:?}", other),
    }
}

// ─── Totality and determinism ───

#[test]
fn test_fallback_to_text() {
    match decode("just some random words").payload {
        CodePayload::Text(text) => assert_eq!(text.text, "just some random words"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_empty_input_is_text() {
    assert_eq!(decode("").kind(), CodeKind::Text);
}

#[test]
fn test_decode_never_panics_on_hostile_input() {
    // Truncated or garbled structured prefixes must degrade, not fail.
    for raw in [
        "WIFI:",
        "WIFI:;;;;",
        "BEGIN:VCARD",
        "MECARD:",
        "tel:",
        "sms:?body=",
        "mailto:?&&&",
        "geo:",
        "geo:,,,",
        "bitcoin:",
        "COUPON:",
        "SKU:;;",
        "://",
        "a:",
        "\u{0}\u{1}\u{2}",
        "héllo wörld",
    ] {
        let _ = decode(raw);
    }
}

#[test]
fn test_decode_is_idempotent() {
    for raw in [
        "WIFI:T:WPA;S:MyNet;P:secret;H:false;;",
        "geo:40.7128,-74.0060",
        "mailto:a@b.com?subject=Hi",
        "random text",
    ] {
        assert_eq!(decode(raw), decode(raw));
    }
}

// ─── Display and storage mapping ───

#[test]
fn test_icon_and_label_derived_from_kind() {
    let parsed = decode("WIFI:T:WPA;S:Net;P:pw;;");
    assert_eq!(parsed.icon(), "wifi");
    assert_eq!(parsed.label(), "WiFi Network");

    let parsed = decode("https://example.com");
    assert_eq!(parsed.icon(), "link");
    assert_eq!(parsed.label(), "URL");
}

#[test]
fn test_storage_mapping_url_vs_text() {
    assert_eq!(
        decode("https://example.com").storage_kind(),
        SavedKind::Url
    );
    assert_eq!(decode("tel:+1555").storage_kind(), SavedKind::Text);
    assert_eq!(decode("plain words").storage_kind(), SavedKind::Text);
    assert_eq!(decode("tel:+1555").storage_title(), "Phone Number");
}

#[test]
fn test_parsed_code_serializes_with_type_tag() {
    let parsed = decode("geo:1.5,-2.5");
    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["type"], "geo");
    assert_eq!(value["latitude"], 1.5);
    assert_eq!(value["raw_data"], "geo:1.5,-2.5");
}
