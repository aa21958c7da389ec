use medium_markdown::ConvertError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `contents` to `{output_dir}/{file_name}`, creating the directory
/// when needed. An existing file is overwritten.
pub fn save(output_dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ConvertError> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)
            .map_err(|e| ConvertError::filesystem(output_dir, e))?;
        tracing::info!("Created output directory: {:?}", output_dir);
    } else if !output_dir.is_dir() {
        return Err(ConvertError::filesystem(
            output_dir,
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                "output path exists but is not a directory",
            ),
        ));
    }

    let output_file_path = output_dir.join(file_name);
    fs::write(&output_file_path, contents)
        .map_err(|e| ConvertError::filesystem(&output_file_path, e))?;
    tracing::info!("Saved {:?}", output_file_path);

    Ok(output_file_path)
}
