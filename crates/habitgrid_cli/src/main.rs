//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitgrid_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from any UI
    // runtime setup.
    println!("habitgrid_core ping={}", habitgrid_core::ping());
    println!("habitgrid_core version={}", habitgrid_core::core_version());
}
