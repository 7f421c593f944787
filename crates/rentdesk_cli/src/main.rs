//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rentdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("rentdesk_core version={}", rentdesk_core::core_version());
    println!(
        "rentdesk_core default_log_level={}",
        rentdesk_core::default_log_level()
    );
}
