#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["4", "A1 A2,C4 D4", "7"])
        .env("BATTLEFIELD_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["ended"], true);
    assert_eq!(v["ships"], 2);
    assert_eq!(v["destroyed"], 2);
    assert_eq!(v["hits"], 4);
    assert!(v["shots"].as_u64().unwrap() <= 16);
}

#[test]
fn sim_binary_rejects_bad_ships() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["4", "A1 B2,B3 B3", "7"])
        .env("BATTLEFIELD_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too close"));
}
