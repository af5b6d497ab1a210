//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version` and the log header.
pub fn version_line() -> String {
    format!("sequence-duel {} ({})", BUILD_DATE, BUILD_COMMIT)
}
