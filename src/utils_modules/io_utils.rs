use crate::common::*;

#[doc = r#"
    Reads a whole file into memory.

    # Arguments
    * `file_path` - file to read

    # Returns
    * `Result<Vec<u8>, TimelineError>` - `Io` carrying the path when the file is missing or unreadable
"#]
pub async fn read_file_bytes(file_path: &Path) -> Result<Vec<u8>, TimelineError> {
    tokio::fs::read(file_path)
        .await
        .map_err(|e| TimelineError::io(file_path, e))
}

#[doc = r#"
    Sibling file a chart is rendered into before it replaces `output_path`.

    Keeps the extension so the image encoder still picks PNG, e.g.
    `out/timeline.png` -> `out/.timeline.rendering.png`.
"#]
pub fn staging_path(output_path: &Path) -> PathBuf {
    let stem: String = output_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "chart".to_string());
    let extension: String = output_path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "png".to_string());

    output_path.with_file_name(format!(".{}.rendering.{}", stem, extension))
}

#[doc = r#"
    Makes sure the directory of `output_path` can take a new chart before any drawing
    targets it. The previous chart at `output_path` is left untouched.

    1. Creates the missing parent directories
    2. Creates the staging file next to `output_path`

    # Returns
    * `Result<PathBuf, TimelineError>` - the staging path, `Io` carrying the failing path
"#]
pub async fn prepare_staging_file(output_path: &Path) -> Result<PathBuf, TimelineError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| TimelineError::io(parent, e))?;
    }

    let staging: PathBuf = staging_path(output_path);
    tokio::fs::File::create(&staging)
        .await
        .map_err(|e| TimelineError::io(&staging, e))?;

    Ok(staging)
}

#[doc = r#"
    Moves a finished chart from `staging` over `output_path`, replacing the previous one.
    The staging file is removed when the move fails.
"#]
pub async fn commit_staging_file(staging: &Path, output_path: &Path) -> Result<(), TimelineError> {
    if let Err(e) = tokio::fs::rename(staging, output_path).await {
        discard_staging_file(staging);
        return Err(TimelineError::io(output_path, e));
    }

    Ok(())
}

#[doc = "Best-effort removal of a staging file left by a failed render"]
pub fn discard_staging_file(staging: &Path) {
    if let Err(e) = fs::remove_file(staging) {
        if e.kind() != std::io::ErrorKind::NotFound {
            info!("Could not remove staging file {:?}: {}", staging, e);
        }
    }
}

#[doc = "Size of a file in bytes, 0 when it cannot be inspected"]
pub fn file_len(file_path: &Path) -> u64 {
    fs::metadata(file_path).map(|meta| meta.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");

        let err = read_file_bytes(&path).await.unwrap_err();

        assert!(err.is_io());
        assert!(err.to_string().contains("absent.png"));
    }

    #[test]
    fn staging_path_is_a_hidden_sibling_with_the_same_extension() {
        assert_eq!(
            staging_path(Path::new("out/timeline.png")),
            PathBuf::from("out/.timeline.rendering.png")
        );
        assert_eq!(
            staging_path(Path::new("timeline.png")),
            PathBuf::from(".timeline.rendering.png")
        );
    }

    #[tokio::test]
    async fn staging_creates_parent_directories_and_keeps_the_old_chart() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/deeper/timeline.png");
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, b"previous chart").unwrap();

        let staging = prepare_staging_file(&output).await.unwrap();

        assert!(staging.exists());
        assert_ne!(staging, output);
        assert_eq!(fs::read(&output).unwrap(), b"previous chart");
    }

    #[tokio::test]
    async fn commit_replaces_the_old_chart() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("timeline.png");
        fs::write(&output, b"previous chart").unwrap();
        let staging = prepare_staging_file(&output).await.unwrap();
        fs::write(&staging, b"new chart").unwrap();

        commit_staging_file(&staging, &output).await.unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"new chart");
        assert!(!staging.exists());
    }

    #[tokio::test]
    async fn failed_commit_removes_the_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("timeline.png");
        fs::create_dir(&output).unwrap();
        fs::write(output.join("keep"), b"x").unwrap();
        let staging = prepare_staging_file(&output).await.unwrap();

        let err = commit_staging_file(&staging, &output).await.unwrap_err();

        assert!(err.is_io());
        assert!(!staging.exists());
        assert!(output.join("keep").exists());
    }

    #[tokio::test]
    async fn output_below_a_regular_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = prepare_staging_file(&blocker.join("timeline.png"))
            .await
            .unwrap_err();

        assert!(err.is_io());
    }
}
