// ============================================================
// Layer 6 — Atomic File Replace
// ============================================================
// Write-then-rename. The bytes go to a uniquely named temporary
// file next to the target, are synced, and the temporary file is
// renamed over the target. Readers see either the old file or the
// new one, never a half-written one.
//
// The temporary name carries a random suffix so two writers in
// flight never share a temporary file.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use rand::Rng;

pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let tmp = temp_path(parent, path);
    let result = (|| -> io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        // best effort; the target is untouched either way
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path(parent: &Path, target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file");
    let suffix: u64 = rand::thread_rng().gen();
    parent.join(format!(".{name}.{suffix:016x}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_parents_and_replaces() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        // no temporary files left behind
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
