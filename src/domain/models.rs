use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A top-level regular file picked up from the input directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub identifier: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PackedFile {
    pub name: String,
    pub identifier: String,
    pub bytes: usize,
    pub sha256: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PackReport {
    pub output: String,
    pub files: Vec<PackedFile>,
    pub skipped: usize,
}
