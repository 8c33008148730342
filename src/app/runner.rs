use crate::app::editorconfig;
use crate::app::error::ReindentError;
use crate::app::host::{FileSystem, TextBuffer};
use crate::app::models::{FileCandidate, IndentSetting, RunConfig, RunSummary};
use crate::app::reindent::reindent_text;
use crate::app::scanner::Scanner;

/// Reindents every eligible file under `config.root`.
///
/// Config errors and an unreadable root abort before any file is touched.
/// Failures on individual files are logged and counted, and the run goes on.
pub fn run_all(config: &RunConfig, fs: &impl FileSystem) -> Result<RunSummary, ReindentError> {
    let setting = editorconfig::load(&config.config_path)?;
    log::info!("File extensions to process: {:?}", config.extensions);

    let scanner = Scanner::new(config.root.clone(), &config.extensions, &config.exclude)?;
    let candidates = scanner.scan()?;

    let mut summary = RunSummary::default();
    for candidate in &candidates {
        log::debug!("Processing file: {}", candidate.relative_path);
        match process_file(candidate, &setting, fs, config.dry_run) {
            Ok(changed) => {
                summary.files_scanned += 1;
                if changed {
                    summary.files_changed += 1;
                }
            }
            Err(err) => {
                log::warn!("Error processing {}: {}", candidate.relative_path, err);
                summary.files_failed += 1;
            }
        }
    }

    log::info!(
        "Processed {} out of {} files, {} changed",
        summary.files_scanned,
        candidates.len(),
        summary.files_changed
    );
    Ok(summary)
}

/// Reindents one buffer and saves it only if it changed.
///
/// The config is resolved before `open_buffer` runs, so a missing or invalid
/// config is reported ahead of any problem with the buffer itself.
pub fn run_single<B: TextBuffer>(
    config: &RunConfig,
    open_buffer: impl FnOnce() -> Result<B, ReindentError>,
) -> Result<RunSummary, ReindentError> {
    let setting = editorconfig::load(&config.config_path)?;
    let mut buffer = open_buffer()?;

    let new_text = reindent_text(buffer.text(), &setting);
    let changed = new_text != buffer.text();

    if changed && !config.dry_run {
        buffer.replace_all(new_text);
        buffer.save().map_err(|source| ReindentError::FileWriteError {
            path: buffer.path().to_path_buf(),
            source,
        })?;
        log::info!("Changes applied to current file");
    } else if !changed {
        log::info!("No changes needed for current file");
    }

    Ok(RunSummary {
        files_scanned: 1,
        files_changed: usize::from(changed),
        files_failed: 0,
    })
}

/// Returns whether the file's content differs from its reindented form.
fn process_file(
    candidate: &FileCandidate,
    setting: &IndentSetting,
    fs: &impl FileSystem,
    dry_run: bool,
) -> Result<bool, ReindentError> {
    let text = fs
        .read_to_string(&candidate.path)
        .map_err(|source| ReindentError::FileOpenError {
            path: candidate.path.clone(),
            source,
        })?;

    let new_text = reindent_text(&text, setting);
    if new_text == text {
        return Ok(false);
    }

    if dry_run {
        log::info!("Would change {}", candidate.relative_path);
    } else {
        log::debug!("Applying changes to {}", candidate.relative_path);
        fs.write(&candidate.path, &new_text)
            .map_err(|source| ReindentError::FileWriteError {
                path: candidate.path.clone(),
                source,
            })?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    /// In-memory files; paths listed in `unreadable`/`unwritable` fail on read/write.
    #[derive(Default)]
    struct MemoryFs {
        files: RefCell<HashMap<PathBuf, String>>,
        unreadable: Vec<PathBuf>,
        unwritable: Vec<PathBuf>,
        writes: RefCell<usize>,
    }

    impl FileSystem for MemoryFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            if self.unreadable.iter().any(|p| p == path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            if self.unwritable.iter().any(|p| p == path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            *self.writes.borrow_mut() += 1;
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    struct StringBuffer {
        path: PathBuf,
        text: String,
        saves: usize,
    }

    impl TextBuffer for StringBuffer {
        fn path(&self) -> &Path {
            &self.path
        }

        fn text(&self) -> &str {
            &self.text
        }

        fn replace_all(&mut self, text: String) {
            self.text = text;
        }

        fn save(&mut self) -> io::Result<()> {
            self.saves += 1;
            Ok(())
        }
    }

    fn config_in(dir: &Path, editorconfig: &str) -> RunConfig {
        let config_path = dir.join(".editorconfig");
        std::fs::write(&config_path, editorconfig).unwrap();
        RunConfig {
            root: dir.to_path_buf(),
            config_path,
            extensions: vec![".md".to_string()],
            exclude: Vec::new(),
            single_file: None,
            show_results: true,
            dry_run: false,
        }
    }

    #[test]
    fn single_file_saves_only_when_changed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "indent_style = tab\nindent_size = 2\n");

        let mut buffer = StringBuffer {
            path: PathBuf::from("current.md"),
            text: "  a\n    b\n".to_string(),
            saves: 0,
        };
        let open = &mut buffer;
        let summary = run_single(&config, move || Ok(open)).unwrap();
        assert_eq!(buffer.text, "\ta\n\t\tb\n");
        assert_eq!(buffer.saves, 1);
        assert_eq!(summary.files_changed, 1);

        let open = &mut buffer;
        let summary = run_single(&config, move || Ok(open)).unwrap();
        assert_eq!(buffer.saves, 1);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.files_scanned, 1);
    }

    #[test]
    fn single_file_dry_run_leaves_buffer_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), "indent_style = tab\nindent_size = 2\n");
        config.dry_run = true;

        let mut buffer = StringBuffer {
            path: PathBuf::from("current.md"),
            text: "  a".to_string(),
            saves: 0,
        };
        let open = &mut buffer;
        let summary = run_single(&config, move || Ok(open)).unwrap();
        assert_eq!(buffer.text, "  a");
        assert_eq!(buffer.saves, 0);
        assert_eq!(summary.files_changed, 1);
    }

    #[test]
    fn read_failure_is_counted_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "indent_style = space\nindent_size = 2\n");
        let good = dir.path().join("good.md");
        let bad = dir.path().join("bad.md");
        std::fs::write(&good, "").unwrap();
        std::fs::write(&bad, "").unwrap();

        let fs = MemoryFs {
            unreadable: vec![bad.clone()],
            ..MemoryFs::default()
        };
        fs.files.borrow_mut().insert(good.clone(), "\tx\n".to_string());

        let summary = run_all(&config, &fs).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                files_scanned: 1,
                files_changed: 1,
                files_failed: 1
            }
        );
        assert_eq!(fs.files.borrow()[&good], "  x\n");
    }

    #[test]
    fn unchanged_files_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "indent_style = space\nindent_size = 2\n");
        let path = dir.path().join("ok.md");
        std::fs::write(&path, "").unwrap();

        let fs = MemoryFs::default();
        fs.files.borrow_mut().insert(path, "  already\nfine\n".to_string());

        let summary = run_all(&config, &fs).unwrap();
        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_changed, 0);
        assert_eq!(*fs.writes.borrow(), 0);
    }

    #[test]
    fn write_failure_is_counted_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "indent_style = space\nindent_size = 2\n");
        let locked = dir.path().join("locked.md");
        let open = dir.path().join("open.md");
        std::fs::write(&locked, "").unwrap();
        std::fs::write(&open, "").unwrap();

        let fs = MemoryFs {
            unwritable: vec![locked.clone()],
            ..MemoryFs::default()
        };
        fs.files.borrow_mut().insert(locked.clone(), "\tlocked\n".to_string());
        fs.files.borrow_mut().insert(open.clone(), "\topen\n".to_string());

        let summary = run_all(&config, &fs).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                files_scanned: 1,
                files_changed: 1,
                files_failed: 1
            }
        );
        assert_eq!(fs.files.borrow()[&open], "  open\n");
        assert_eq!(fs.files.borrow()[&locked], "\tlocked\n");
        assert_eq!(*fs.writes.borrow(), 1);
    }

    #[test]
    fn single_file_checks_config_before_opening() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), "");
        config.config_path = dir.path().join("missing.editorconfig");

        let mut opened = false;
        let result = run_single(&config, || -> Result<StringBuffer, ReindentError> {
            opened = true;
            Err(ReindentError::FileOpenError {
                path: PathBuf::from("current.md"),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
        });

        assert!(matches!(result, Err(ReindentError::ConfigNotFound { .. })));
        assert!(!opened);
    }
}
