use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tempfile::Builder;
use tracing::info;

use crate::countries;
use crate::error::{ReportError, Result};
use crate::report::{Report, ReportSummary};

/// Reads `input_path`, derives every report section and writes the report to
/// `output_path`, using the default worker count.
pub fn generate_report(input_path: &Path, output_path: &Path) -> Result<ReportSummary> {
    generate_report_with_workers(input_path, output_path, None)
}

pub fn generate_report_with_workers(
    input_path: &Path,
    output_path: &Path,
    max_workers: Option<usize>,
) -> Result<ReportSummary> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "report_pipeline", input = ?input_path, output = ?output_path, "Starting country report");

    let countries = countries::load_countries(input_path)?;

    let max_workers = max_workers.unwrap_or_else(|| {
        let cpu_count = num_cpus::get();
        std::cmp::min(cpu_count, 8)
    });
    info!(action = "configure", component = "report_pipeline", worker_count = max_workers, "Using workers for section derivation");

    let derive_start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers)
        .build()?;
    let report = pool.install(|| Report::build(&countries));
    info!(
        action = "derive",
        component = "report_pipeline",
        section_count = report.sections.len(),
        duration_ms = derive_start.elapsed().as_millis(),
        "Derived report sections"
    );

    let rendered = report.render();
    write_atomically(output_path, &rendered)?;

    let summary = ReportSummary {
        output_path: output_path.to_path_buf(),
        country_count: countries.len(),
        section_count: report.sections.len(),
        line_count: report.lines().len(),
    };

    info!(
        action = "complete",
        component = "report_pipeline",
        country_count = summary.country_count,
        line_count = summary.line_count,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Country report completed"
    );
    Ok(summary)
}

/// Writes `contents` to a temporary file beside `path` and renames it into
/// place. The destination directory is created first if it does not exist.
///
/// An existing file keeps its permissions; a new one gets the mode a plain
/// create would give it (0o666 less the umask on unix).
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        info!(action = "create", component = "output_dir", path = ?dir, "Creating output directory");
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let existing = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = Builder::new();
    if existing.is_none() {
        default_permissions(&mut builder);
    }
    let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(action = "write", component = "output_file", path = ?path, bytes = contents.len(), "Report written");
    Ok(())
}

// tempfile defaults to 0o600; the kernel applies the umask to this mode.
#[cfg(unix)]
fn default_permissions(builder: &mut Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn default_permissions(_builder: &mut Builder<'_, '_>) {}

pub fn print_summary(summary: &ReportSummary) {
    println!(
        "Wrote {} sections ({} lines) for {} countries to {}",
        summary.section_count,
        crate::utils::format_number(summary.line_count),
        crate::utils::format_number(summary.country_count),
        summary.output_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("data.txt");
        write_atomically(&target, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("data.txt");
        fs::write(&target, "a much longer previous report\n").unwrap();
        write_atomically(&target, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "short\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("data.txt");
        fs::write(&target, "previous\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomically(&target, "next\n").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_plain_create_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        fs::File::create(&reference).unwrap();
        let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

        let target = dir.path().join("data.txt");
        write_atomically(&target, "fresh\n").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[test]
    fn directory_at_output_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("matches");
        fs::create_dir(&target).unwrap();

        let err = write_atomically(&target, "report\n").unwrap_err();
        assert!(matches!(err, ReportError::WriteOutput { .. }));
        assert!(err.io_error().is_some());

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("matches")]);
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn directory_blocked_by_file_is_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("matches");
        fs::write(&blocker, "not a directory").unwrap();
        let err = write_atomically(&blocker.join("sub").join("data.txt"), "x").unwrap_err();
        assert!(matches!(err, ReportError::CreateDir { .. }));
    }

    #[test]
    fn missing_input_leaves_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("matches").join("data.txt");
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, "previous\n").unwrap();

        let err = generate_report(&dir.path().join("missing.txt"), &output).unwrap_err();
        assert!(matches!(err, ReportError::ReadInput { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }

    #[test]
    fn summary_counts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("countries.txt");
        fs::write(&input, "Chad\nFrance\nUnited States\n").unwrap();
        let output = dir.path().join("out").join("data.txt");

        let summary = generate_report_with_workers(&input, &output, Some(2)).unwrap();
        assert_eq!(summary.country_count, 3);
        assert_eq!(summary.section_count, 16);
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), summary.line_count);
    }
}
