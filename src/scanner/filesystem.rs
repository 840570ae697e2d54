//! Filesystem access used by the scanner
//!
//! The scanner only needs two operations: list a directory and read a file as
//! UTF-8 text. [`DiskFileSystem`] backs them with `std::fs`;
//! [`MemoryFileSystem`] is a virtual tree for exercising traversal and
//! exclusion logic without touching the disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Not traversed and not searched (symlinked directories, sockets, fifos)
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// File name as text; non UTF-8 names are converted lossily
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub trait FileSystem {
    /// List the immediate children of `dir`
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read a whole file as UTF-8; invalid content yields `ErrorKind::InvalidData`
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(dir)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    fn classify(path: &Path, file_type: fs::FileType) -> EntryKind {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            // Links are never followed into directories; a dangling link is
            // still a file that simply fails to read
            match fs::metadata(path) {
                Ok(meta) if meta.is_dir() => EntryKind::Other,
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(_) => EntryKind::Other,
                Err(_) => EntryKind::File,
            }
        } else {
            EntryKind::Other
        }
    }
}

impl FileSystem for DiskFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!("Ignoring unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let kind = match entry.file_type() {
                Ok(file_type) => Self::classify(&path, file_type),
                Err(_) => EntryKind::File,
            };
            entries.push(DirEntry { path, kind });
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[derive(Debug, Clone)]
enum Node {
    Dir { locked: bool },
    File { contents: Vec<u8>, locked: bool },
}

/// In-memory directory tree
///
/// Parent directories are created implicitly. "Locked" nodes fail with
/// `PermissionDenied` when listed or read.
///
/// ```
/// use sourcescan::scanner::filesystem::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new().with_file("/p/src/app.ts", "let x = 1;");
/// assert_eq!(fs.read_dir(Path::new("/p")).unwrap().len(), 1);
/// assert_eq!(fs.read_to_string(Path::new("/p/src/app.ts")).unwrap(), "let x = 1;");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::Dir { locked: false });
        self
    }

    pub fn with_locked_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), Node::Dir { locked: true });
        self
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        let node = Node::File {
            contents: contents.as_ref().to_vec(),
            locked: false,
        };
        self.insert(path.as_ref(), node);
        self
    }

    pub fn with_locked_file(mut self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        let node = Node::File {
            contents: contents.as_ref().to_vec(),
            locked: true,
        };
        self.insert(path.as_ref(), node);
        self
    }

    fn insert(&mut self, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir { locked: false });
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: No such file or directory", path.display()),
        )
    }

    fn denied(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{}: Permission denied", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        match self.nodes.get(dir) {
            Some(Node::Dir { locked: false }) => {}
            Some(Node::Dir { locked: true }) => return Err(Self::denied(dir)),
            Some(Node::File { .. }) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{}: Not a directory", dir.display()),
                ))
            }
            None => return Err(Self::not_found(dir)),
        }

        Ok(self
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .map(|(path, node)| {
                let kind = match node {
                    Node::Dir { .. } => EntryKind::Directory,
                    Node::File { .. } => EntryKind::File,
                };
                DirEntry::new(path.clone(), kind)
            })
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.get(path) {
            Some(Node::File { locked: true, .. }) => Err(Self::denied(path)),
            Some(Node::File { contents, .. }) => String::from_utf8(contents.clone()).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                )
            }),
            Some(Node::Dir { .. }) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: Is a directory", path.display()),
            )),
            None => Err(Self::not_found(path)),
        }
    }
}
