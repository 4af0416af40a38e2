use std::path::{Path, PathBuf};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

/// Memory-mapped view over the Swagger document on disk.
pub struct SpecLoader {
  path: PathBuf,
  file: AsyncMmapFile,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to read schema document {}", path.display()))?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn bytes(&self) -> &[u8] {
    self.file.as_slice()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[tokio::test]
  async fn test_open_exposes_file_bytes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"definitions":{}}"#).unwrap();

    let loader = SpecLoader::open(file.path()).await.unwrap();
    assert_eq!(loader.bytes(), br#"{"definitions":{}}"#);
    assert_eq!(loader.path(), file.path());
  }

  #[tokio::test]
  async fn test_open_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let err = SpecLoader::open(&missing).await.err().unwrap();
    assert!(format!("{err:#}").contains("absent.json"));
  }
}
