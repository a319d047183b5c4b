use crate::*;
use std::path::Path;
use std::path::PathBuf;

/// Load a strategy module from disk.
///
/// The path may be relative and may omit the `.json` extension. Every call
/// reads the file again and returns an independent [`Module`]; nothing is
/// cached between calls. The module's namespace key comes from the file's
/// base name, so same-named files in different directories share a key.
pub fn load(path: impl AsRef<Path>) -> Result<Module, Error> {
    let path = normalize(path.as_ref())?;
    if !path.is_file() {
        return Err(Error::ModuleNotFound { path });
    }
    let text = std::fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    let module = Module::parse(&path, &text)?;
    log::debug!(
        "[loader] {} <- {} ({} members)",
        module.key(),
        path.display(),
        module.members().count()
    );
    Ok(module)
}

/// Absolute path with the module extension appended when missing.
/// An empty path names no file at all.
pub fn normalize(path: &Path) -> Result<PathBuf, Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::ModuleNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut path = std::path::absolute(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(EXTENSION);
        path.set_file_name(name);
    }
    Ok(path)
}
