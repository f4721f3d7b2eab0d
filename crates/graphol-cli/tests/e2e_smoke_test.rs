use std::{fs, path::PathBuf};

use tempfile::tempdir;

use graphol::serialize::OwlSyntax;
use graphol_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn args(input: &PathBuf, output: &PathBuf, syntax: OwlSyntax) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        syntax: Some(syntax),
        iri: Some("http://www.example.com/demo".to_string()),
        prefix: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        for syntax in [OwlSyntax::Functional, OwlSyntax::Manchester] {
            let output_filename = format!(
                "{}.{syntax}.owl",
                demo_path.file_stem().unwrap().to_string_lossy()
            );
            let output_path = temp_dir.path().join(output_filename);

            match run(&args(demo_path, &output_path, syntax)) {
                Ok(()) => {
                    let owl = fs::read_to_string(&output_path).expect("Failed to read output");
                    assert!(
                        owl.contains("<http://www.example.com/demo>"),
                        "{} has no ontology header",
                        output_path.display()
                    );
                }
                Err(e) => failed_demos.push((demo_path.clone(), syntax, e)),
            }
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, syntax, err) in &failed_demos {
            eprintln!("  - {} ({syntax}): {}", path.display(), err);
        }
        panic!("{} valid demo run(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.owl",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args(demo_path, &output_path, OwlSyntax::Functional)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        } else {
            assert!(
                !output_path.exists(),
                "{} produced output despite failing",
                demo_path.display()
            );
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}
