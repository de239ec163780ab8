//! Directory scanning and the per-file pipeline.
//!
//! Walks a root directory for candidate log files and runs each one
//! through parse → correlate → summarize. Files are independent: a
//! file that fails to read, or yields nothing interesting, is skipped
//! without touching the rest of the batch.

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::correlate;
use crate::error::{BarlogError, Result};
use crate::parser::{self, ParseFailure};
use crate::stats::{self, DirectorySummary, FileStats};

/// Find candidate log files under `root`, recursively.
///
/// A candidate's basename starts with the configured prefix and does
/// not contain the exclude marker.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BarlogError::InvalidRoot(root.to_path_buf()));
    }

    let pattern = format!("{}/**/*", root.display());
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(&config.files.prefix) && !name.contains(&config.files.exclude_marker) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the full pipeline for one file, if it yields anything.
///
/// Returns `None` when the file cannot be read or contains no
/// interesting lines; such files contribute nothing to the summary.
pub fn analyze_file(path: &Path, config: &Config) -> Option<FileStats> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };

    let parsed = parser::parse(&contents);
    for failure in &parsed.failures {
        match failure {
            ParseFailure::LineSplit { line_index } => {
                warn!(
                    "Failure loading line {} in file {}",
                    line_index,
                    path.display()
                );
            }
            ParseFailure::StopReason { line_index } => {
                warn!(
                    "Unparseable stop reason at line {} in file {}",
                    line_index,
                    path.display()
                );
            }
        }
    }

    if parsed.lines.is_empty() {
        debug!("No interesting lines in {}", path.display());
        return None;
    }

    let pairs = correlate::correlate(&parsed.lines, &config.correlation.outcomes);
    let tally = stats::summarize(&pairs);
    Some(FileStats::new(path.display().to_string(), tally))
}

/// Analyze every candidate log file under `root` and reduce the
/// per-file stats into a [`DirectorySummary`].
pub fn analyze_dir(root: &Path, config: &Config) -> Result<DirectorySummary> {
    let files = discover(root, config)?;
    info!("Found {} candidate log files under {}", files.len(), root.display());

    let mut summary = DirectorySummary::default();
    for path in &files {
        if let Some(stats) = analyze_file(path, config) {
            summary.push(stats);
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ORDER_LOG: &str = "\
2024-01-01 10:00:00 - [INFO] - ['order: mojito']
2024-01-01 10:00:01 - [INFO] - ---Start Serving
2024-01-01 10:00:09 - [INFO] - ---Serving Complete
2024-01-01 10:01:00 - [INFO] - ['order: cola']
";

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_discover_filters_by_prefix_and_marker() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("device-a");
        fs::create_dir(&nested).unwrap();

        write(temp.path(), "log_2024-01-01.txt", ORDER_LOG);
        write(&nested, "log_2024-01-02.txt", ORDER_LOG);
        write(&nested, "log_checkpoint.txt", ORDER_LOG);
        write(temp.path(), "readme.txt", "not a log");

        let files = discover(temp.path(), &Config::default()).unwrap();
        let mut names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["log_2024-01-01.txt", "log_2024-01-02.txt"]);
    }

    #[test]
    fn test_discover_rejects_missing_root() {
        let err = discover(Path::new("/no/such/dir"), &Config::default()).unwrap_err();
        assert!(matches!(err, BarlogError::InvalidRoot(_)));
    }

    #[test]
    fn test_analyze_file_counts_orders() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "log_a.txt", ORDER_LOG);

        let stats = analyze_file(&path, &Config::default()).unwrap();
        // Only the first order has a window; the trailing one is the
        // boundary action.
        assert_eq!(stats.num_orders, 1);
        assert_eq!(stats.num_incomplete, 0);
        assert_eq!(stats.self_resolved, 0);
    }

    /// A file with no interesting lines is excluded, not a zero row.
    #[test]
    fn test_empty_file_is_excluded_from_summary() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "log_a.txt", ORDER_LOG);
        write(temp.path(), "log_empty.txt", "2024 - [INFO] - heartbeat\n");

        let summary = analyze_dir(temp.path(), &Config::default()).unwrap();
        assert_eq!(summary.per_file.len(), 1);
        assert!(summary.per_file[0].filename.ends_with("log_a.txt"));
    }

    #[test]
    fn test_analyze_dir_sums_totals() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "log_a.txt", ORDER_LOG);
        write(temp.path(), "log_b.txt", ORDER_LOG);

        let summary = analyze_dir(temp.path(), &Config::default()).unwrap();
        assert_eq!(summary.per_file.len(), 2);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_incomplete, 0);
    }
}
