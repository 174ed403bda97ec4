#![allow(clippy::style)]

fn main() {
    // Compile the proptest modules only when requested; the deterministic
    // test suite does not depend on them.
    if std::env::var_os("RUST_BIGINT_PROPERTY_TESTS").is_some() {
        println!("cargo:rustc-cfg=property_tests");
    }

    println!("cargo:rerun-if-env-changed=RUST_BIGINT_PROPERTY_TESTS");
}
