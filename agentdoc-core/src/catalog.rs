//! Role catalog: built-in role records plus optional user overrides.
//!
//! # Sources
//!
//! ```text
//! <binary>                   built-in roles (YAML baked in via include_str!)
//! <catalog_dir>/
//!   <id>.yaml | <id>.yml     user records; override built-ins by id
//! ```
//!
//! Record order matters only for reporting: built-ins keep their fixed order,
//! overrides replace in place, new ids are appended in file-name order.

use std::path::{Path, PathBuf};

use crate::error::{io_err, CatalogError};
use crate::types::RoleRecord;

// ---------------------------------------------------------------------------
// Embedded roles: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const BUILTIN: &[(&str, &str)] = &[
    (
        "requirements-analyst.yaml",
        include_str!("roles/requirements-analyst.yaml"),
    ),
    ("ui-ux-designer.yaml", include_str!("roles/ui-ux-designer.yaml")),
    ("architect.yaml", include_str!("roles/architect.yaml")),
    (
        "frontend-developer.yaml",
        include_str!("roles/frontend-developer.yaml"),
    ),
    (
        "backend-developer.yaml",
        include_str!("roles/backend-developer.yaml"),
    ),
    (
        "mobile-developer.yaml",
        include_str!("roles/mobile-developer.yaml"),
    ),
    (
        "desktop-developer.yaml",
        include_str!("roles/desktop-developer.yaml"),
    ),
    ("qa-engineer.yaml", include_str!("roles/qa-engineer.yaml")),
    ("devops-engineer.yaml", include_str!("roles/devops-engineer.yaml")),
    ("release-manager.yaml", include_str!("roles/release-manager.yaml")),
];

// ---------------------------------------------------------------------------
// 1. Built-in roles
// ---------------------------------------------------------------------------

/// Parse the ten built-in role records, in their fixed order.
pub fn builtin() -> Result<Vec<RoleRecord>, CatalogError> {
    BUILTIN
        .iter()
        .map(|(name, contents)| parse(Path::new("builtin").join(name), contents))
        .collect()
}

fn parse(path: PathBuf, contents: &str) -> Result<RoleRecord, CatalogError> {
    serde_yaml::from_str(contents).map_err(|source| CatalogError::Parse { path, source })
}

// ---------------------------------------------------------------------------
// 2. User catalog directories
// ---------------------------------------------------------------------------

/// `<dir>/<id>.yaml`: pure, no I/O.
pub fn record_path_at(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.yaml"))
}

/// Load one role record from a YAML file.
pub fn load_record_at(path: &Path) -> Result<RoleRecord, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse(path.to_path_buf(), &contents)
}

/// Load every `*.yaml` / `*.yml` file directly under `dir`, sorted by file name.
///
/// Returns `CatalogError::CatalogNotFound` if `dir` is not a directory.
pub fn load_dir_at(dir: &Path) -> Result<Vec<RoleRecord>, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::CatalogNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| io_err(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_yaml(p))
        .collect();
    entries.sort();

    entries.iter().map(|path| load_record_at(path)).collect()
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

// ---------------------------------------------------------------------------
// 3. Merge / resolve
// ---------------------------------------------------------------------------

/// Apply `overrides` on top of `base`.
///
/// A record whose id already exists replaces the first record with that id,
/// keeping its position. Unknown ids are appended in the order given.
pub fn merge(base: Vec<RoleRecord>, overrides: Vec<RoleRecord>) -> Vec<RoleRecord> {
    let mut merged = base;
    for record in overrides {
        match merged.iter().position(|r| r.id == record.id) {
            Some(idx) => merged[idx] = record,
            None => merged.push(record),
        }
    }
    merged
}

/// Built-in roles merged with the records in `catalog_dir`, if one is given.
pub fn resolve(catalog_dir: Option<&Path>) -> Result<Vec<RoleRecord>, CatalogError> {
    let base = builtin()?;
    match catalog_dir {
        Some(dir) => Ok(merge(base, load_dir_at(dir)?)),
        None => Ok(base),
    }
}

// ---------------------------------------------------------------------------
// 4. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `record` to `<dir>/<id>.yaml`, creating `dir` if absent.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `rename`.
pub fn save_record_at(dir: &Path, record: &RoleRecord) -> Result<PathBuf, CatalogError> {
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    let path = record_path_at(dir, record.id.as_str());
    let tmp_path = path.with_file_name(format!("{}.yaml.tmp", record.id));

    let yaml = serde_yaml::to_string(record)?;
    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    if let Err(e) = std::fs::rename(&tmp_path, &path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(io_err(&path, e));
    }
    Ok(path)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
