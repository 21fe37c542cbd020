use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn error_msg(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.red());
    }
}

pub fn info(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg);
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

pub fn json_output(value: serde_json::Value) {
    // Value's Serialize impl cannot fail.
    if let Ok(text) = serde_json::to_string_pretty(&value) {
        println!("{text}");
    }
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}

/// Errors that are neither a verdict nor malformed input (I/O and the like).
pub fn fatal(err: &anyhow::Error) {
    if is_json() {
        json_output(serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("{} {err:#}", "error:".red().bold());
    }
}
