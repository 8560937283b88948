// WHY: Loads whole manuscripts as UTF-8 text; analysis needs the full document, not a line stream
// Rich formats (.docx, .rtf, .pdf) are rejected up front rather than read as garbage

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

use crate::error::PlushError;

/// Extensions accepted as plain-text manuscripts, compared case-insensitively
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Configuration for manuscript loading
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Memory-map the file instead of reading it through tokio
    pub use_mmap: bool,
    /// Reject files larger than this many bytes
    pub max_bytes: Option<u64>,
}

/// Whether a path has one of the plain-text extensions
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn check_format(path: &Path) -> Result<(), PlushError> {
    if is_supported(path) {
        return Ok(());
    }
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_else(|| "no extension".to_string());
    Err(PlushError::UnsupportedFormat(format!("{} ({ext})", path.display())))
}

/// Read a manuscript file into memory as text
pub async fn read_manuscript<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<String> {
    let path = path.as_ref();
    let start_time = std::time::Instant::now();
    check_format(path)?;

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to open manuscript {}", path.display()))?;
    if let Some(limit) = config.max_bytes {
        if metadata.len() > limit {
            warn!("Rejecting {}: {} bytes exceeds limit of {}", path.display(), metadata.len(), limit);
            anyhow::bail!(
                "Manuscript {} is {} bytes, larger than the {} byte limit",
                path.display(),
                metadata.len(),
                limit
            );
        }
    }

    let text = if config.use_mmap {
        read_mmap(path)?
    } else {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read manuscript {}", path.display()))?;
        String::from_utf8(bytes)
            .map_err(|e| PlushError::InvalidUtf8(format!("{}: {}", path.display(), e.utf8_error())))?
    };

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        text.len(),
        start_time.elapsed().as_millis()
    );
    Ok(text)
}

/// Memory-mapped read with UTF-8 validation of the mapped bytes
fn read_mmap(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open manuscript {}", path.display()))?;
    // Empty files cannot be mapped on every platform
    if file.metadata()?.len() == 0 {
        return Ok(String::new());
    }
    // SAFETY: the mapping is read-only and copied out before the file handle is dropped
    let mmap = unsafe { memmap2::Mmap::map(&file) }
        .with_context(|| format!("Failed to memory-map {}", path.display()))?;
    debug!("Mapped {} bytes from {}", mmap.len(), path.display());
    let text = std::str::from_utf8(&mmap)
        .map_err(|e| PlushError::InvalidUtf8(format!("{}: {}", path.display(), e)))?;
    Ok(text.to_owned())
}

/// Read all of standard input as text
pub async fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read standard input")?;
    let text = String::from_utf8(bytes)
        .map_err(|e| PlushError::InvalidUtf8(format!("stdin: {}", e.utf8_error())))?;
    debug!("Read {} bytes from stdin", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await.unwrap();
        file_path
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("draft.txt")));
        assert!(is_supported(Path::new("notes/CHAPTER.MD")));
        assert!(is_supported(Path::new("a.Text")));
        assert!(!is_supported(Path::new("novel.docx")));
        assert!(!is_supported(Path::new("README")));
    }

    #[tokio::test]
    async fn test_read_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = "Line 1.\nLine 2 with ünïcode \u{201C}quotes\u{201D}.";
        let path = create_test_file(temp_dir.path(), "draft.txt", content.as_bytes()).await;

        let text = read_manuscript(&path, &ReaderConfig::default()).await.unwrap();
        assert_eq!(text, content);
    }

    #[tokio::test]
    async fn test_mmap_matches_buffered_read() {
        let temp_dir = TempDir::new().unwrap();
        let content = "It was a dark and stormy night.\n\n\"Run,\" said Ada.";
        let path = create_test_file(temp_dir.path(), "story.md", content.as_bytes()).await;

        let buffered = read_manuscript(&path, &ReaderConfig::default()).await.unwrap();
        let mapped = read_manuscript(&path, &ReaderConfig { use_mmap: true, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(buffered, mapped);
    }

    #[tokio::test]
    async fn test_empty_file_with_mmap() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "empty.txt", b"").await;
        let config = ReaderConfig { use_mmap: true, ..Default::default() };
        assert_eq!(read_manuscript(&path, &config).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_unsupported_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "novel.docx", b"PK").await;

        let err = read_manuscript(&path, &ReaderConfig::default()).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<PlushError>(), Some(PlushError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "bad.txt", &[0x66, 0x6f, 0xff, 0xfe]).await;

        for use_mmap in [false, true] {
            let config = ReaderConfig { use_mmap, ..Default::default() };
            let err = read_manuscript(&path, &config).await.unwrap_err();
            assert!(matches!(err.downcast_ref::<PlushError>(), Some(PlushError::InvalidUtf8(_))));
        }
    }

    #[tokio::test]
    async fn test_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "long.txt", "x".repeat(100).as_bytes()).await;

        let config = ReaderConfig { max_bytes: Some(10), ..Default::default() };
        assert!(read_manuscript(&path, &config).await.is_err());
        let config = ReaderConfig { max_bytes: Some(100), ..Default::default() };
        assert!(read_manuscript(&path, &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let err = read_manuscript(&path, &ReaderConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to open manuscript"));
    }
}
