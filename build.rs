use std::env;
use std::path::PathBuf;

fn main() {
    let decision_src = PathBuf::from("csrc");

    println!("cargo:rerun-if-changed=csrc");

    let mut build = cc::Build::new();

    build.file(decision_src.join("decision.c"));
    build.include(&decision_src);

    build
        .flag_if_supported("-std=c99")
        .flag_if_supported("-w")
        .opt_level(2);

    // Support for cargo-zigbuild
    if env::var("CARGO_CFG_TARGET_ENV").is_ok() {
        build.flag_if_supported("-fno-sanitize=undefined");
    }

    build.compile("decision");
}
