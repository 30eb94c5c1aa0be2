use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::{categories::slugify, Error, Result};

/// Persists one category's records under `base/namespace/<slug>.json` as an
/// indented JSON array, replacing any previous file.
pub async fn save<T: Serialize>(
    base: &Path,
    namespace: &str,
    label: &str,
    records: &[T],
) -> Result<()> {
    let dir = base.join(namespace);
    fs::create_dir_all(&dir).await?;

    let json = serde_json::to_string_pretty(records)?;
    fs::write(dir.join(format!("{}.json", slugify(label))), json).await?;

    Ok(())
}

/// Loads every partition in a namespace, keyed by the filename-derived slug.
/// Partitions come back sorted by slug so iteration order is stable across
/// runs. A missing namespace directory is a hard error: the next stage has
/// nothing to work from.
pub async fn load_all<T: DeserializeOwned>(
    base: &Path,
    namespace: &str,
) -> Result<Vec<(String, Vec<T>)>> {
    let dir = base.join(namespace);
    if !dir.is_dir() {
        return Err(Error::MissingNamespace(namespace.to_string()));
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut partitions = Vec::with_capacity(paths.len());
    for path in paths {
        let slug = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = fs::read_to_string(&path).await?;
        partitions.push((slug, serde_json::from_str(&text)?));
    }

    Ok(partitions)
}
