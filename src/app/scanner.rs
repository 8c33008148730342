use crate::app::error::ReindentError;
use crate::app::models::FileCandidate;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(
        root: PathBuf,
        extensions: &[String],
        exclude: &[String],
    ) -> Result<Self, ReindentError> {
        Ok(Self {
            root,
            extensions: extensions.to_vec(),
            exclude_set: build_globset(exclude)?,
        })
    }

    /// Collects every file under the root whose path ends with one of the extensions.
    ///
    /// The root must be a listable directory. Unreadable subdirectories are
    /// logged and skipped. Order follows directory listing order, depth first.
    pub fn scan(&self) -> Result<Vec<FileCandidate>, ReindentError> {
        std::fs::read_dir(&self.root).map_err(|e| ReindentError::DirectoryUnreadable {
            path: self.root.clone(),
            reason: e.to_string(),
        })?;

        let exclude_set = self.exclude_set.clone();
        let root = self.root.clone();

        // No ignore files, no hidden-file filtering: every directory is descended.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(true)
            .filter_entry(move |entry| !is_excluded(&exclude_set, &root, entry.path()))
            .build();

        let mut candidates = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file {
                        if let Some(candidate) = self.process_entry(entry.path()) {
                            candidates.push(candidate);
                        }
                    }
                }
                Err(err) => log::warn!("Skipping unreadable entry: {}", err),
            }
        }

        log::info!("Found {} files to process", candidates.len());
        Ok(candidates)
    }

    fn process_entry(&self, path: &Path) -> Option<FileCandidate> {
        let path_str = path.to_string_lossy();
        if !self.extensions.iter().any(|ext| path_str.ends_with(ext.as_str())) {
            return None;
        }

        let relative_path = diff_paths(path, &self.root)
            .map(|rel| rel.to_string_lossy().into_owned())
            .unwrap_or_else(|| path_str.clone().into_owned());

        Some(FileCandidate {
            path: path.to_path_buf(),
            relative_path,
        })
    }
}

fn is_excluded(exclude_set: &GlobSet, root: &Path, path: &Path) -> bool {
    if exclude_set.is_empty() || path == root {
        return false;
    }
    diff_paths(path, root).is_some_and(|relative| exclude_set.is_match(&relative))
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ReindentError> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).map_err(|source| ReindentError::InvalidPattern {
            pattern: pat.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ReindentError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}
