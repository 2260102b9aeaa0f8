//! Compile-time build information for the `--version` output.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
