//! Tests for the repository Makefile
//!
//! `make help` lists every `target: ## description` line, sorted, one row
//! per target. `make lint` runs formatter, linter and lock regeneration in
//! that order. The first failing cargo call aborts `build` and `lint`.

use std::path::PathBuf;
use std::process::Command;

fn makefile_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Makefile")
}

fn make_available() -> bool {
    Command::new("make")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Documented targets as (name, description), in file order
fn documented_targets(makefile: &str) -> Vec<(String, String)> {
    makefile
        .lines()
        .filter_map(|line| {
            let (target, rest) = line.split_once(':')?;
            if target.is_empty() || !target.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                return None;
            }
            let (_, description) = rest.split_once("## ")?;
            Some((target.to_string(), description.to_string()))
        })
        .collect()
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn test_documented_targets() {
    let makefile = std::fs::read_to_string(makefile_path()).expect("Makefile exists");
    let targets = documented_targets(&makefile);
    let names: Vec<_> = targets.iter().map(|(name, _)| name.as_str()).collect();

    assert_eq!(names, vec!["build", "help", "lint"]);
    assert!(targets.contains(&("lint".to_string(), "lint the code".to_string())));
}

#[test]
fn test_lint_recipe_order() {
    let makefile = std::fs::read_to_string(makefile_path()).expect("Makefile exists");
    let recipe: Vec<_> = makefile
        .lines()
        .skip_while(|line| !line.starts_with("lint:"))
        .skip(1)
        .take_while(|line| line.starts_with('\t'))
        .map(str::trim)
        .collect();

    assert_eq!(
        recipe,
        vec![
            "cargo fmt --all",
            "cargo clippy --all-targets",
            "cargo generate-lockfile"
        ]
    );
}

#[test]
fn test_make_help_rows() {
    if !make_available() {
        return;
    }

    let output = Command::new("make")
        .arg("--no-print-directory")
        .arg("-f")
        .arg(makefile_path())
        .arg("help")
        .output()
        .expect("Failed to run make help");
    assert!(output.status.success());

    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    let rows: Vec<_> = stdout.lines().collect();
    assert_eq!(rows.len(), 3, "rows: {rows:?}");
    assert!(rows[0].starts_with("build"));
    assert!(rows[1].starts_with("help"));
    assert!(rows[2].starts_with("lint"));
    assert!(rows[2].trim_end().ends_with("lint the code"));
    // the undocumented `version` target is not listed
    assert!(!stdout.contains("version"));
}

/// Temp dir holding a `cargo` stand-in that logs each call to `calls.log`
/// and fails on `pkgid` and `fmt`
#[cfg(unix)]
fn failing_cargo_dir() -> tempfile::TempDir {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let script = dir.path().join("cargo");
    std::fs::write(
        &script,
        "#!/bin/sh\necho \"cargo $*\" >> \"$LOG\"\ncase \"$1\" in pkgid|fmt) exit 1;; esac\nexit 0\n",
    )
    .expect("Failed to write cargo script");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod cargo script");
    dir
}

/// Runs `make <target>` with the stand-in `cargo` first on PATH, returning
/// whether make succeeded and the logged cargo calls
#[cfg(unix)]
fn make_with_failing_cargo(target: &str) -> (bool, String) {
    let dir = failing_cargo_dir();
    let log = dir.path().join("calls.log");
    let path = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![dir.path().to_path_buf()];
    paths.extend(std::env::split_paths(&path));

    let output = Command::new("make")
        .arg("--no-print-directory")
        .arg("-f")
        .arg(makefile_path())
        .arg(target)
        .current_dir(dir.path())
        .env("PATH", std::env::join_paths(paths).expect("valid PATH"))
        .env("LOG", &log)
        .output()
        .expect("Failed to run make");

    let calls = std::fs::read_to_string(&log).unwrap_or_default();
    (output.status.success(), calls)
}

#[cfg(unix)]
#[test]
fn test_make_build_stops_when_version_query_fails() {
    if !make_available() {
        return;
    }

    let (success, calls) = make_with_failing_cargo("build");

    assert!(!success, "build should fail when cargo pkgid fails");
    assert_eq!(calls, "cargo pkgid\n");
}

#[cfg(unix)]
#[test]
fn test_make_lint_stops_when_formatter_fails() {
    if !make_available() {
        return;
    }

    let (success, calls) = make_with_failing_cargo("lint");

    assert!(!success, "lint should fail when cargo fmt fails");
    assert_eq!(calls, "cargo fmt --all\n");
}
