//! Directory traversal and the per-path scan entry point.
//!
//! Only regular files with a `.c`, `.h` or `.cpp` extension are scanned.
//! Paths that cannot be read are reported to stderr and skipped; they
//! never abort the run.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use walkdir::WalkDir;

use crate::scan::ScanContext;

/// Extensions accepted by the scanner.
const SOURCE_EXTENSIONS: &[&str] = &["c", "h", "cpp"];

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Scan a file or directory root, printing findings to `out`. Without
/// the recursive option, directory roots are walked one level deep.
pub fn scan_tree<W: Write>(ctx: &mut ScanContext, root: &Path, out: &mut W) -> io::Result<()> {
    let max_depth = if ctx.options().recursive {
        usize::MAX
    } else {
        1
    };

    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("klogscan: {err}");
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }
        scan_file(ctx, entry.path(), out)?;
    }
    Ok(())
}

/// Scan one regular file. Non-UTF-8 bytes are decoded lossily so a stray
/// encoding never aborts the scan.
fn scan_file<W: Write>(ctx: &mut ScanContext, path: &Path, out: &mut W) -> io::Result<()> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("klogscan: cannot open {}: {err}", path.display());
            return Ok(());
        }
    };
    let source = String::from_utf8_lossy(&bytes);
    ctx.scan_source(path, &source, out)?;
    ctx.counters.files += 1;
    Ok(())
}
