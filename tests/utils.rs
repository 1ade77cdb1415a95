#![allow(dead_code)]

use kiln::category::ProjectCategory;
use kiln::cli::{run, Args};
use kiln::generator::GeneratedFile;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const TEMPLATES_DIR: &str = "tests/templates";

/// Builds the arguments of a run against the fixture library, writing into
/// `output_dir`.
pub fn args(category: ProjectCategory, project_name: &str, output_dir: &Path) -> Args {
    Args {
        category,
        project_name: project_name.to_string(),
        output_dir: output_dir.to_path_buf(),
        config: None,
        templates_dir: PathBuf::from(TEMPLATES_DIR),
        template_suffix: ".template".to_string(),
        no_shared: false,
        author: None,
        project_version: None,
        description: None,
        verbose: 2,
    }
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = files(dir1);
    let files2 = files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read(dir1.join(file)).unwrap();
        let expected = fs::read(dir2.join(file)).unwrap();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&actual));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&expected));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Runs kiln with `args`, compares the output to the expected directory,
/// prints any differences, and asserts that the directories are identical.
pub fn run_and_assert(args: Args, expected_dir: &str) -> Vec<GeneratedFile> {
    let output_dir = args.output_dir.clone();
    let generated = run(args).unwrap();
    if dir_diff::is_different(&output_dir, expected_dir).unwrap() {
        print_dir_diff(&output_dir, expected_dir.as_ref());
        panic!("Directories differ. See above for details.");
    }
    generated
}
