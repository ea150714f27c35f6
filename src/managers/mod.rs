// ScanKit managers
// Managers provide CRUD over persisted entities, backed by SQLite.

pub mod saved_code_manager;
