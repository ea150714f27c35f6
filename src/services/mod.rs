// ScanKit services
// Services implement the codec core: payload classification/decoding,
// payload encoding, barcode checksum validation, and scan-content detection.

pub mod barcode_validator;
pub mod format_detector;
pub mod payload_decoder;
pub mod payload_encoder;
