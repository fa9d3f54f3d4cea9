//! Git commit and build date baked in by build.rs, shown by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
