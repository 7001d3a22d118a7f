//! UI utilities for terminal output.

mod qr;
mod summary;

pub use qr::print_qr_code;
pub use summary::print_summary;
