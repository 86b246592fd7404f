use crate::domain::models::{FileEntry, PackReport, PackedFile};
use crate::services::render::write_declaration;
use crate::services::sanitize::sanitize_identifier;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum PackError {
    #[error("cannot list input directory {}", .path.display())]
    ListInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open output file {}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("identifier `{identifier}` is produced by both {first} and {second}")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptions {
    /// Emit blocks in file-name order instead of raw listing order.
    pub sort: bool,
    /// Reject two files that sanitize to the same identifier.
    pub deny_collisions: bool,
}

/// Where `output` lives once created, with symlinks and `..` resolved.
/// `None` when its parent directory cannot be resolved either.
fn resolve_output(output: &Path) -> Option<PathBuf> {
    if let Ok(p) = output.canonicalize() {
        return Some(p);
    }
    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(name))
}

/// Regular files directly inside `dir`, in listing order, plus the number of
/// entries that were skipped. An entry resolving to `exclude` is left out
/// and not counted, whether or not it exists yet.
pub fn list_files(
    dir: &Path,
    exclude: Option<&Path>,
) -> Result<(Vec<FileEntry>, usize), PackError> {
    let list_err = |source| PackError::ListInput {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut skipped = 0usize;
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if exclude.is_some() && path.canonicalize().ok().as_deref() == exclude {
            log::debug!("skipping output file {}", path.display());
            continue;
        }
        // Follows symlinks; dangling links and special files are skipped.
        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            log::debug!("skipping non-regular entry {}", path.display());
            skipped += 1;
            continue;
        }
        files.push(FileEntry {
            identifier: sanitize_identifier(&name),
            name,
            path,
        });
    }
    Ok((files, skipped))
}

pub fn find_collision(files: &[FileEntry]) -> Option<PackError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for f in files {
        if let Some(first) = seen.insert(&f.identifier, &f.name) {
            return Some(PackError::IdentifierCollision {
                identifier: f.identifier.clone(),
                first: first.to_string(),
                second: f.name.clone(),
            });
        }
    }
    None
}

/// Converts every top-level regular file of `dir` into a byte-array
/// declaration written to `output`.
///
/// The directory is listed before `output` is opened, so a bad input path
/// never truncates an existing output file. An output file inside `dir` is
/// never packed into itself. A read failure part way through leaves the
/// blocks written so far in place.
pub fn pack_directory(dir: &Path, output: &Path, opts: PackOptions) -> Result<PackReport, PackError> {
    let output_path = resolve_output(output);
    let (mut files, skipped) = list_files(dir, output_path.as_deref())?;

    if opts.sort {
        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    } else {
        log::debug!("keeping directory listing order for {} files", files.len());
    }

    if opts.deny_collisions {
        if let Some(err) = find_collision(&files) {
            return Err(err);
        }
    }

    let write_err = |source| PackError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(|source| PackError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);

    let mut packed = Vec::with_capacity(files.len());
    for f in &files {
        let data = fs::read(&f.path).map_err(|source| PackError::ReadFile {
            path: f.path.clone(),
            source,
        })?;
        log::debug!("{} -> {} ({} bytes)", f.name, f.identifier, data.len());
        write_declaration(&mut out, &f.identifier, &data).map_err(write_err)?;
        packed.push(PackedFile {
            name: f.name.clone(),
            identifier: f.identifier.clone(),
            bytes: data.len(),
            sha256: hex::encode(Sha256::digest(&data)),
        });
    }
    out.flush().map_err(write_err)?;

    Ok(PackReport {
        output: output.to_string_lossy().to_string(),
        files: packed,
        skipped,
    })
}
