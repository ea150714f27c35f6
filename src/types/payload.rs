use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::saved::SavedKind;

/// Closed set of payload categories the classifier can produce.
///
/// Every scanned string maps to exactly one kind; anything unrecognized
/// falls through to [`CodeKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    Url,
    Text,
    Phone,
    Sms,
    Email,
    Vcard,
    Mecard,
    Wifi,
    Geo,
    Calendar,
    Deeplink,
    Crypto,
    Coupon,
    Sku,
    Social,
}

impl CodeKind {
    /// Presentation icon name for this kind.
    pub fn icon(self) -> &'static str {
        match self {
            CodeKind::Url => "link",
            CodeKind::Text => "text",
            CodeKind::Phone => "phone",
            CodeKind::Sms => "message",
            CodeKind::Email => "email",
            CodeKind::Vcard | CodeKind::Mecard => "contact",
            CodeKind::Wifi => "wifi",
            CodeKind::Geo => "location",
            CodeKind::Calendar => "calendar",
            CodeKind::Deeplink => "app",
            CodeKind::Crypto => "crypto",
            CodeKind::Coupon => "coupon",
            CodeKind::Sku => "product",
            CodeKind::Social => "social",
        }
    }

    /// Human-readable label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            CodeKind::Url => "URL",
            CodeKind::Text => "Text",
            CodeKind::Phone => "Phone Number",
            CodeKind::Sms => "SMS Message",
            CodeKind::Email => "Email",
            CodeKind::Vcard => "Contact Card",
            CodeKind::Mecard => "Contact",
            CodeKind::Wifi => "WiFi Network",
            CodeKind::Geo => "Location",
            CodeKind::Calendar => "Calendar Event",
            CodeKind::Deeplink => "App Link",
            CodeKind::Crypto => "Crypto Payment",
            CodeKind::Coupon => "Coupon",
            CodeKind::Sku => "Product Info",
            CodeKind::Social => "Social Media",
        }
    }

    /// Quick actions a result screen offers for this kind.
    pub fn quick_actions(self) -> &'static [QuickAction] {
        use QuickAction::*;
        match self {
            CodeKind::Url | CodeKind::Social | CodeKind::Deeplink => &[OpenLink, CopyRaw],
            CodeKind::Text => &[CopyText],
            CodeKind::Phone => &[Call, CopyNumber],
            CodeKind::Sms => &[ComposeSms, CopyNumber],
            CodeKind::Email => &[ComposeEmail, CopyEmail],
            CodeKind::Vcard | CodeKind::Mecard => &[SaveContact, CopyNumber],
            CodeKind::Wifi => &[CopyPassword, CopySsid],
            CodeKind::Geo => &[ShowOnMap, CopyRaw],
            CodeKind::Calendar => &[AddToCalendar, CopyRaw],
            CodeKind::Crypto => &[CopyAddress, CopyRaw],
            CodeKind::Coupon | CodeKind::Sku => &[CopyCode, CopyRaw],
        }
    }
}

/// Actions the UI can map to buttons on a scan-result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    OpenLink,
    Call,
    ComposeSms,
    ComposeEmail,
    SaveContact,
    AddToCalendar,
    ShowOnMap,
    CopyText,
    CopyRaw,
    CopyNumber,
    CopyEmail,
    CopySsid,
    CopyPassword,
    CopyAddress,
    CopyCode,
}

/// WiFi network credentials from a `WIFI:` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
    /// Security type (`WPA`, `WEP`, ...). Defaults to `Open` when absent.
    pub security: String,
    pub hidden: bool,
    pub eap_method: Option<String>,
}

/// Contact fields from a `BEGIN:VCARD` payload. Only the fields observed
/// in practice; anything absent stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Contact fields from a `MECARD:` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeCardContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub url: String,
}

/// Event fields from a `BEGIN:VEVENT` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub number: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Coordinates from a `geo:` URI. Unparseable components resolve to 0.0
/// so parsed payloads keep structural equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: Option<f64>,
}

/// Payment request from a `bitcoin:`/`ethereum:`/`litecoin:` URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPayment {
    /// Coin name, lower-cased.
    pub coin: String,
    pub address: String,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: String,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub sku: String,
    pub lot: String,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLink {
    /// URI scheme, i.e. the text before the first `:`.
    pub scheme: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebLink {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainText {
    pub text: String,
}

/// Structured payload — one variant per code kind, each carrying its own
/// field record. Serializes as `{"type": "...", ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CodePayload {
    Url(WebLink),
    Text(PlainText),
    Phone(PhoneNumber),
    Sms(SmsMessage),
    Email(EmailMessage),
    Vcard(ContactCard),
    Mecard(MeCardContact),
    Wifi(WifiNetwork),
    Geo(GeoLocation),
    Calendar(CalendarEvent),
    Deeplink(DeepLink),
    Crypto(CryptoPayment),
    Coupon(Coupon),
    Sku(ProductInfo),
    Social(SocialLink),
}

impl CodePayload {
    /// Discriminant of this payload.
    pub fn kind(&self) -> CodeKind {
        match self {
            CodePayload::Url(_) => CodeKind::Url,
            CodePayload::Text(_) => CodeKind::Text,
            CodePayload::Phone(_) => CodeKind::Phone,
            CodePayload::Sms(_) => CodeKind::Sms,
            CodePayload::Email(_) => CodeKind::Email,
            CodePayload::Vcard(_) => CodeKind::Vcard,
            CodePayload::Mecard(_) => CodeKind::Mecard,
            CodePayload::Wifi(_) => CodeKind::Wifi,
            CodePayload::Geo(_) => CodeKind::Geo,
            CodePayload::Calendar(_) => CodeKind::Calendar,
            CodePayload::Deeplink(_) => CodeKind::Deeplink,
            CodePayload::Crypto(_) => CodeKind::Crypto,
            CodePayload::Coupon(_) => CodeKind::Coupon,
            CodePayload::Sku(_) => CodeKind::Sku,
            CodePayload::Social(_) => CodeKind::Social,
        }
    }
}

/// Result of decoding a scanned string: the structured payload plus the
/// original text, retained verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCode {
    pub raw_data: String,
    #[serde(flatten)]
    pub payload: CodePayload,
}

impl ParsedCode {
    pub fn kind(&self) -> CodeKind {
        self.payload.kind()
    }

    pub fn icon(&self) -> &'static str {
        self.kind().icon()
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// Storage kind for the saved-code history: `url` survives as-is,
    /// everything else is stored as `text`.
    pub fn storage_kind(&self) -> SavedKind {
        match self.kind() {
            CodeKind::Url => SavedKind::Url,
            _ => SavedKind::Text,
        }
    }

    /// Default title when saving this code to history.
    pub fn storage_title(&self) -> &'static str {
        self.label()
    }
}
