//! ScanKit CLI — exercises the codec and the saved-code history from the
//! command line.
//!
//! Commands:
//!   scankit decode "<payload>"            classify and print the parsed record
//!   scankit detect "<payload>"            QR-vs-barcode rendering decision
//!   scankit validate <FORMAT> <value>     barcode validation (EAN13, UPC, ...)
//!   scankit save <user-id> "<payload>"    decode and save to history
//!   scankit list <user-id>                newest-first history for a user

use std::process::ExitCode;

use serde_json::json;

use scankit::database::Database;
use scankit::managers::saved_code_manager::{SavedCodeManager, SavedCodeStore};
use scankit::services::barcode_validator::validate_barcode;
use scankit::services::format_detector::detect_scan_content;
use scankit::services::payload_decoder::decode;
use scankit::types::barcode::BarcodeFormat;

const USAGE: &str = "usage: scankit <decode|detect|validate|save|list> ...";

/// History page size for `list`, matching the default of the web API
/// this replaces.
const LIST_LIMIT: i64 = 100;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("");
    let rest = args.get(1..).unwrap_or(&[]);

    let result = match (command, rest) {
        ("decode", [payload]) => cmd_decode(payload),
        ("detect", [payload]) => cmd_detect(payload),
        ("validate", [format, value]) => cmd_validate(format, value),
        ("save", [user_id, payload]) => cmd_save(user_id, payload),
        ("list", [user_id]) => cmd_list(user_id),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scankit: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_decode(payload: &str) -> Result<(), String> {
    let parsed = decode(payload);
    let mut value = serde_json::to_value(&parsed).map_err(|e| e.to_string())?;
    value["icon"] = json!(parsed.icon());
    value["label"] = json!(parsed.label());
    println!("{}", value);
    Ok(())
}

fn cmd_detect(payload: &str) -> Result<(), String> {
    let content = detect_scan_content(payload);
    println!(
        "{}",
        json!({
            "is_barcode": content.is_barcode,
            "format": content.format.as_str(),
        })
    );
    Ok(())
}

fn cmd_validate(format: &str, value: &str) -> Result<(), String> {
    let format: BarcodeFormat = format.parse()?;
    let validation = validate_barcode(value, format);
    println!(
        "{}",
        json!({
            "is_valid": validation.is_valid,
            "error": validation.error.as_ref().map(|e| e.to_string()),
            "final_value": validation.final_value,
        })
    );
    Ok(())
}

fn cmd_save(user_id: &str, payload: &str) -> Result<(), String> {
    let db = open_database()?;
    let mut manager = SavedCodeManager::new(db.connection());

    let parsed = decode(payload);
    let id = manager
        .save(
            user_id,
            payload,
            parsed.storage_kind(),
            Some(parsed.storage_title()),
        )
        .map_err(|e| e.to_string())?;
    println!("{}", json!({ "id": id, "label": parsed.label() }));
    Ok(())
}

fn cmd_list(user_id: &str) -> Result<(), String> {
    let db = open_database()?;
    let manager = SavedCodeManager::new(db.connection());

    let (codes, total) = manager
        .list(Some(user_id), 0, LIST_LIMIT)
        .map_err(|e| e.to_string())?;
    println!(
        "{}",
        json!({ "data": codes, "total": total, "limit": LIST_LIMIT })
    );
    Ok(())
}

/// Opens the history database — SCANKIT_DATA_DIR when set, otherwise the
/// current directory.
fn open_database() -> Result<Database, String> {
    let path = match std::env::var("SCANKIT_DATA_DIR") {
        Ok(dir) => std::path::PathBuf::from(dir).join("scankit.db"),
        Err(_) => std::path::PathBuf::from("scankit.db"),
    };
    Database::open(path).map_err(|e| e.to_string())
}
