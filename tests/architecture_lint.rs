//! Architecture enforcement lint - keeps storage details in one place.
//!
//! The preference slot name and the legacy flag keys are declared once in
//! `src/prefs/`; everything else (scripts, components, tests inside `src/`)
//! must go through `PREF_KEY` / `BINDINGS`. Browser storage is only touched
//! by `src/prefs/storage.rs`.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// (pattern, files allowed to contain it, hint)
const RULES: &[(&str, &[&str], &str)] = &[
    (
        "\"portfolio_prefs_v1\"",
        &["prefs/mod.rs"],
        "Use prefs::PREF_KEY instead of the literal slot name",
    ),
    (
        "\"photoRound\"",
        &["prefs/mod.rs", "prefs/store.rs"],
        "Legacy keys belong in prefs::BINDINGS",
    ),
    (
        "\"profileRound\"",
        &["prefs/mod.rs", "prefs/store.rs"],
        "Legacy keys belong in prefs::BINDINGS",
    ),
    (
        "local_storage()",
        &["prefs/storage.rs"],
        "Go through prefs::KeyValueStore",
    ),
];

fn normalized(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

fn analyze_file(path: &Path) -> Vec<(String, String, String)> {
    let path_str = normalized(path);
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();
    for (pattern, allowed, hint) in RULES {
        if allowed.iter().any(|file| path_str.ends_with(file)) {
            continue;
        }
        for (idx, line) in content.lines().enumerate() {
            if line.contains(pattern) {
                violations.push((
                    format!("{}:{}", path_str, idx + 1),
                    (*pattern).to_string(),
                    (*hint).to_string(),
                ));
            }
        }
    }
    violations
}

#[test]
fn storage_details_stay_in_prefs() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();
    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from("\n\nStorage details leaked outside src/prefs/:\n\n");
        for (location, pattern, hint) in &all_violations {
            error_msg.push_str(&format!("  {location}\n    found: {pattern}\n    fix:   {hint}\n\n"));
        }
        panic!("{}", error_msg);
    }
}

#[test]
fn lint_scans_the_prefs_module() {
    // Guard against the walk silently matching nothing
    let prefs = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/prefs/mod.rs");
    let content = fs::read_to_string(prefs).expect("prefs module exists");
    assert!(content.contains("\"portfolio_prefs_v1\""));
}
