use std::env;
use std::fs;

/// Variables read through `option_env!` in `src/config.rs`
const CONFIG_KEYS: [&str; 5] = [
    "API_BASE_URL",
    "TOKEN_STORAGE_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=No .env file, building against the default portal API");
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    // The real environment takes precedence over the file
    contents
        .lines()
        .filter_map(parse_assignment)
        .filter(|(key, _)| env::var(key).is_err())
        .for_each(|(key, value)| println!("cargo:rustc-env={}={}", key, value));
}

/// `KEY=value`, `export KEY="value"`; blank lines and `#` comments yield None
fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    Some((key, value))
}
