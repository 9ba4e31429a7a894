//! Compile-time build information (`BUILD_COMMIT`, `BUILD_DATE`, `LONG_VERSION`).

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
