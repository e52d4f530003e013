use include_dir::{Dir, DirEntry, File};

use crate::domain::AppError;

const TEMPLATE_SUFFIX: &str = ".j2";

/// One embedded file. Files ending in `.j2` are rendered before being written.
#[derive(Debug, Clone)]
pub struct AssetSourceFile {
    pub content: String,
    relative_path: String,
}

impl AssetSourceFile {
    fn from_embedded(root: &Dir, file: &File) -> Result<Self, AppError> {
        let shown = file.path().display();
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::InternalError(format!("Embedded asset is not UTF-8: {}", shown))
        })?;
        let relative = file.path().strip_prefix(root.path()).map_err(|_| {
            AppError::InternalError(format!("Embedded asset lies outside its root: {}", shown))
        })?;

        let segments: Vec<_> = relative.iter().map(|part| part.to_string_lossy()).collect();
        Ok(Self { content: content.to_string(), relative_path: segments.join("/") })
    }

    pub fn is_template(&self) -> bool {
        self.relative_path.ends_with(TEMPLATE_SUFFIX)
    }

    pub fn template_name(&self) -> &str {
        &self.relative_path
    }

    /// `/`-separated path the file is written to, without the template suffix.
    pub fn output_path(&self) -> String {
        let path = &self.relative_path;
        path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path).to_string()
    }
}

/// Every file under `root`, sorted by path.
pub fn collect_asset_sources(root: &Dir) -> Result<Vec<AssetSourceFile>, AppError> {
    let mut sources = Vec::new();
    let mut pending: Vec<&Dir> = vec![root];

    while let Some(dir) = pending.pop() {
        for entry in dir.entries() {
            match entry {
                DirEntry::Dir(child) => pending.push(child),
                DirEntry::File(file) => sources.push(AssetSourceFile::from_embedded(root, file)?),
            }
        }
    }

    sources.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(sources)
}
