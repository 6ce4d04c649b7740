//! End-to-end tests for the ckitgen binary.

use std::{
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

fn ckitgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ckitgen"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run ckitgen")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "ckitgen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_camel_and_capitalize() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(stdout(&ckitgen(dir.path(), &["camel", "foo", "bar", "baz"])), "fooBarBaz\n");
    assert_eq!(stdout(&ckitgen(dir.path(), &["camel"])), "\n");
    assert_eq!(stdout(&ckitgen(dir.path(), &["capitalize", "foo"])), "Foo\n");
}

#[test]
fn test_platform() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        stdout(&ckitgen(dir.path(), &["platform", "fbsd"])),
        "os(FreeBSD) || os(PS4)\n"
    );
    assert!(!ckitgen(dir.path(), &["platform", "linux"]).status.success());
}

#[test]
fn test_pointer_accessors() {
    let dir = tempfile::tempdir().unwrap();
    let out = ckitgen(dir.path(), &["pointer", "AnyMutableBufferPointer"]);
    assert_eq!(stdout(&out), ".mutableRawBuffer.baseAddress\n");

    let out = ckitgen(dir.path(), &["pointer", "AnyBufferPointer", "--flavor", "raw-o"]);
    assert_eq!(stdout(&out), ".rawBuffer\n");

    // Unknown tags fall through to the plain accessor
    let out = ckitgen(dir.path(), &["pointer", "Foo", "--flavor", "raw-o"]);
    assert_eq!(stdout(&out), ".rawPointer\n");
}

#[test]
fn test_pointer_table_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout(&ckitgen(dir.path(), &["pointer", "--all", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["rows"][1]["raw"], ".mutableRawPointer");
}

#[test]
fn test_option_set_uses_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ckitgen.toml"),
        "[swift]\naccess = \"internal\"\nraw_value = \"UInt32\"\n",
    )
    .unwrap();

    let out = stdout(&ckitgen(dir.path(), &["option-set"]));
    assert!(out.contains("internal typealias RawValue = UInt32"));

    let out = stdout(&ckitgen(dir.path(), &["option-set", "--access", "public"]));
    assert!(out.contains("public var rawValue: UInt32"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ckitgen.toml"), "[swift]\naccess = \"global\"\n").unwrap();

    let out = ckitgen(dir.path(), &["option-set"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a Swift access modifier"));
}

#[test]
fn test_guard_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_ckitgen"))
        .current_dir(dir.path())
        .args(["guard", "64bit"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"typealias Word = UInt64\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert_eq!(stdout(&out), "#if arch(x86_64)\ntypealias Word = UInt64\n#endif\n");
}

#[test]
fn test_license_flags() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout(&ckitgen(dir.path(), &["license", "--holder", "Jane Doe", "--year", "2024"]));
    assert!(out.starts_with("//  Copyright (c) 2024, Jane Doe\n"));
}

#[test]
fn test_guard_with_otherwise_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("darwin.swift"), "import Darwin\n").unwrap();
    std::fs::write(dir.path().join("glibc.swift"), "import Glibc\n").unwrap();

    let out = stdout(&ckitgen(
        dir.path(),
        &["guard", "bsd", "--file", "darwin.swift", "--otherwise", "glibc.swift"],
    ));
    assert_eq!(
        out,
        format!("#if {}\nimport Darwin\n#else\nimport Glibc\n#endif\n", ckitgen_core::BSD)
    );
}

#[test]
fn test_license_uses_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ckitgen.toml"),
        "[license]\nholder = \"Jane Doe\"\nsince = 2016\nyear = 2017\n",
    )
    .unwrap();

    let out = stdout(&ckitgen(dir.path(), &["license"]));
    assert!(out.starts_with("//  Copyright (c) 2016, Jane Doe\n"));
    assert!(out.ends_with("//  Copyright © 2017 Jane Doe. All rights reserved.\n//\n"));
}

#[test]
fn test_platform_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout(&ckitgen(dir.path(), &["platform"]));
    assert!(out.starts_with("Platforms:\n"));
    assert!(out.contains("  fbsd: os(FreeBSD) || os(PS4)\n"));
    assert!(out.contains("  64bit: arch(x86_64)\n"));

    let out = stdout(&ckitgen(dir.path(), &["platform", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["rows"][0]["name"], "darwin");
}
