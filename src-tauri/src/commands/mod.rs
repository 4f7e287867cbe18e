//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. Rust owns all
//! state; the WebView only renders what it is handed back.

pub mod todos;
