//! End-to-end scans through the library API over real temporary trees.

use std::fs;
use std::path::Path;

use klogscan::scan::{Counters, ScanContext, ScanOptions};
use klogscan::scanner::funcs::FuncTable;
use klogscan::walk;

fn scan_tree(root: &Path, options: ScanOptions) -> (Counters, String) {
    let table = FuncTable::build().unwrap();
    let mut ctx = ScanContext::new(&table, options);
    let mut out = Vec::new();
    walk::scan_tree(&mut ctx, root, &mut out).unwrap();
    (ctx.counters, String::from_utf8(out).unwrap())
}

#[test]
fn scans_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("driver.c");
    fs::write(
        &file,
        "static int init(void)\n{\n\tprintk(\"hello \" \"world\\n\");\n\treturn 0;\n}\n",
    )
    .unwrap();

    let (counters, output) = scan_tree(&file, ScanOptions::default());
    assert_eq!(counters.files, 1);
    assert_eq!(counters.finds, 1);
    assert_eq!(counters.lines, 5);
    assert!(output.contains(&format!("Source: {}", file.display())));
    assert!(output.contains("printk(\"hello world\\n\");"));
}

#[test]
fn extension_filter_applies_to_explicit_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "printk(\"not a source file\");\n").unwrap();

    let (counters, output) = scan_tree(&file, ScanOptions::default());
    assert_eq!(counters, Counters::default());
    assert!(output.is_empty());
}

#[test]
fn directory_scan_is_shallow_without_recursive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top.c"), "printk(\"top\");\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/deep.c"), "printk(\"deep\");\n").unwrap();

    let (counters, output) = scan_tree(dir.path(), ScanOptions::default());
    assert_eq!(counters.files, 1);
    assert_eq!(counters.finds, 1);
    assert!(output.contains("printk(\"top\");"));
    assert!(!output.contains("deep"));
}

#[test]
fn recursive_scan_reaches_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top.c"), "printk(\"top\");\n").unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("a/b/deep.h"), "dev_err(dev, \"deep\");\n").unwrap();

    let options = ScanOptions {
        recursive: true,
        ..ScanOptions::default()
    };
    let (counters, output) = scan_tree(dir.path(), options);
    assert_eq!(counters.files, 2);
    assert_eq!(counters.finds, 2);
    assert!(output.contains("printk(\"top\");"));
    assert!(output.contains("dev_err(dev, \"deep\");"));
}

#[test]
fn non_source_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "pr_warn(\"w\");\n").unwrap();
    fs::write(dir.path().join("Makefile"), "all:\n\ttrue\n").unwrap();
    fs::write(dir.path().join("lib.rs"), "// printk(\"no\");\n").unwrap();

    let (counters, _) = scan_tree(dir.path(), ScanOptions::default());
    assert_eq!(counters.files, 1);
    assert_eq!(counters.finds, 1);
}

#[test]
fn counters_accumulate_across_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.c"),
        "printk(\"a1\");\nprintk(\"a2\");\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.c"), "int x;\n\n\n").unwrap();

    let (counters, _) = scan_tree(dir.path(), ScanOptions::default());
    assert_eq!(counters.files, 2);
    assert_eq!(counters.lines, 5);
    assert_eq!(counters.finds, 2);
}

#[test]
fn each_emitting_file_gets_header_and_trailing_blank_line() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("one.c");
    fs::write(&file, "printk(\"x\");\nprintk(\"y\");\n").unwrap();

    let (_, output) = scan_tree(&file, ScanOptions::default());
    assert_eq!(
        output,
        format!(
            "Source: {}\nprintk(\"x\");\nprintk(\"y\");\n\n",
            file.display()
        )
    );
}

#[test]
fn tolerates_non_utf8_sources() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("latin1.c");
    fs::write(&file, b"printk(\"caf\xe9\");\n").unwrap();

    let (counters, output) = scan_tree(&file, ScanOptions::default());
    assert_eq!(counters.files, 1);
    assert_eq!(counters.finds, 1);
    assert!(output.contains("printk(\"caf"));
}

#[test]
fn missing_path_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let (counters, output) = scan_tree(&missing, ScanOptions::default());
    assert_eq!(counters, Counters::default());
    assert!(output.is_empty());
}
