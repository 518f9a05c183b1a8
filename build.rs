use std::env;
use std::fs;

const FORWARDED: [&str; 4] = [
    "API_URL_DEVELOPMENT",
    "API_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
];

// Copies the receipt API settings from .env into the compile-time environment
// read by src/config.rs. A variable set in the shell takes precedence.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for name in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", name);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=isave: no .env found, API calls go to http://127.0.0.1:8000");
        return;
    };

    let pairs = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='));

    for (key, value) in pairs {
        let key = key.trim();
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
