//! Capabilities supplied by whatever hosts the reindenter, plus the
//! command-line implementations used by the binary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Whole-file text access.
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the file's content entirely or leaves it untouched.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// The single document a one-file run operates on.
pub trait TextBuffer {
    fn path(&self) -> &Path;
    fn text(&self) -> &str;
    fn replace_all(&mut self, text: String);
    fn save(&mut self) -> io::Result<()>;
}

impl<T: TextBuffer + ?Sized> TextBuffer for &mut T {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn text(&self) -> &str {
        (**self).text()
    }

    fn replace_all(&mut self, text: String) {
        (**self).replace_all(text)
    }

    fn save(&mut self) -> io::Result<()> {
        (**self).save()
    }
}

/// User-facing messages.
pub trait Notifier {
    fn inform(&self, message: &str);
    fn error(&self, message: &str);
}

/// Local disk, with writes going through a temp file in the target directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Symlinks are resolved first so the rename replaces the link's target,
    /// not the link. Hard-linked files end up with a fresh inode.
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let target = match fs::canonicalize(path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(e),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }

        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// A file loaded into memory, saved back through a [`FileSystem`].
pub struct FileBuffer<F: FileSystem> {
    fs: F,
    path: PathBuf,
    text: String,
}

impl<F: FileSystem> FileBuffer<F> {
    pub fn open(fs: F, path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let text = fs.read_to_string(&path)?;
        Ok(Self { fs, path, text })
    }
}

impl<F: FileSystem> TextBuffer for FileBuffer<F> {
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
        self.fs.write(&self.path, &self.text)
    }
}

/// Prints informative messages to stdout and errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn inform(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
