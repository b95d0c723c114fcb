// ============================================================
// Layer 6 — Object Store (local bucket)
// ============================================================
// A directory standing in for a hosted storage bucket. Objects
// are keyed by file name and uploads overwrite (upsert).
//
//   bucket/model-bucket/
//     model.json      ← last uploaded model
//
// Any hosted bucket can replace this by implementing the
// ObjectStore trait from Layer 3.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::error::{AssistantError, AssistantResult};
use crate::domain::traits::ObjectStore;
use crate::infra::atomic_file::write_atomic;

pub struct LocalBucket {
    dir: PathBuf,
}

impl LocalBucket {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn object_path(&self, path: &Path) -> AssistantResult<PathBuf> {
        let key = path
            .file_name()
            .ok_or_else(|| AssistantError::ObjectStore(format!("'{}' has no file name", path.display())))?;
        Ok(self.dir.join(key))
    }
}

impl ObjectStore for LocalBucket {
    fn upload(&self, path: &Path) -> AssistantResult<()> {
        let target = self.object_path(path)?;
        let bytes  = fs::read(path)
            .map_err(|e| AssistantError::ObjectStore(format!("read '{}': {e}", path.display())))?;
        write_atomic(&target, &bytes)
            .map_err(|e| AssistantError::ObjectStore(format!("write '{}': {e}", target.display())))?;

        tracing::info!("Uploaded '{}' to bucket '{}'", path.display(), self.dir.display());
        Ok(())
    }

    fn download(&self, path: &Path) -> AssistantResult<()> {
        let source = self.object_path(path)?;
        let bytes  = fs::read(&source)
            .map_err(|e| AssistantError::ObjectStore(format!("read '{}': {e}", source.display())))?;
        write_atomic(path, &bytes)
            .map_err(|e| AssistantError::ObjectStore(format!("write '{}': {e}", path.display())))?;

        tracing::info!("Downloaded '{}' from bucket '{}'", path.display(), self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_then_download_elsewhere() {
        let dir    = tempfile::tempdir().unwrap();
        let bucket = LocalBucket::new(dir.path().join("bucket"));
        let local  = dir.path().join("models/model.json");
        fs::create_dir_all(local.parent().unwrap()).unwrap();
        fs::write(&local, b"v1").unwrap();

        bucket.upload(&local).unwrap();
        fs::write(&local, b"v2").unwrap();
        bucket.upload(&local).unwrap();

        let restored = dir.path().join("fresh/model.json");
        bucket.download(&restored).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), b"v2");
    }

    #[test]
    fn test_download_of_missing_object_fails() {
        let dir    = tempfile::tempdir().unwrap();
        let bucket = LocalBucket::new(dir.path().join("bucket"));
        let err    = bucket.download(&dir.path().join("model.json")).unwrap_err();
        assert!(matches!(err, AssistantError::ObjectStore(_)));
    }
}
