use crate::domain::models::IconCopy;
use sha2::{Digest, Sha256};
use std::path::Path;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Copies `source` into `<res_dir>/<bucket>/<file_name>` for every bucket,
/// creating bucket directories and overwriting existing files.
pub fn install_launcher_icons(
    source: &Path,
    res_dir: &Path,
    buckets: &[String],
    file_name: &str,
) -> std::io::Result<Vec<IconCopy>> {
    let bytes = std::fs::read(source)?;
    let digest = sha256_hex(&bytes);
    let mut copies = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let dir = res_dir.join(bucket);
        std::fs::create_dir_all(&dir)?;
        let dst = dir.join(file_name);
        std::fs::write(&dst, &bytes)?;
        tracing::debug!(path = %dst.display(), "launcher icon written");
        copies.push(IconCopy {
            bucket: bucket.clone(),
            path: dst.to_string_lossy().to_string(),
            sha256: digest.clone(),
        });
    }
    Ok(copies)
}
