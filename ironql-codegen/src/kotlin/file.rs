//! Writes rendered Kotlin declarations to disk.

use super::render::KotlinRenderer;
use crate::declaration::EmissionRequest;
use crate::emitter::Emitter;
use crate::error::CodegenError;
use std::path::{Path, PathBuf};

/// Emitter writing one `.kt` file per request below a root directory.
///
/// Files land in `<root>/<namespace as path>/<Name>.kt`. Existing files are
/// overwritten; nothing is ever deleted.
#[derive(Debug, Clone)]
pub struct KotlinFileEmitter {
    root: PathBuf,
    renderer: KotlinRenderer,
    written: Vec<PathBuf>,
}

impl KotlinFileEmitter {
    /// Creates an emitter writing below `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: KotlinRenderer::new(),
            written: Vec::new(),
        }
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the files written so far, in emission order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Returns the path a request will be written to.
    #[must_use]
    pub fn path_for(&self, request: &EmissionRequest) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(request.namespace.split('.').filter(|s| !s.is_empty()));
        path.push(format!("{}.kt", request.name));
        path
    }
}

impl Emitter for KotlinFileEmitter {
    fn emit(&mut self, request: EmissionRequest) -> Result<(), CodegenError> {
        let path = self.path_for(&request);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.renderer.render(&request))?;
        tracing::debug!(path = %path.display(), "wrote declaration");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Declaration, DeclarationKind, EnumConstantSpec};

    fn episode() -> EmissionRequest {
        let mut declaration = Declaration::new(DeclarationKind::EnumClass, "Episode");
        declaration.enum_constants.push(EnumConstantSpec {
            name: "JEDI".to_string(),
            description: None,
        });
        EmissionRequest::new("com.example.starwars", declaration)
    }

    #[test]
    fn test_path_for_namespace() {
        let emitter = KotlinFileEmitter::new("/out");
        let path = emitter.path_for(&episode());
        assert_eq!(
            path,
            Path::new("/out/com/example/starwars/Episode.kt").to_path_buf()
        );
    }

    #[test]
    fn test_emit_writes_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut emitter = KotlinFileEmitter::new(dir.path());
        emitter.emit(episode()).expect("Failed to emit");

        let path = dir.path().join("com/example/starwars/Episode.kt");
        assert_eq!(emitter.written(), [path.clone()]);
        let contents = std::fs::read_to_string(&path).expect("Failed to read");
        assert!(contents.starts_with("// Generated by IronQL. Do not edit.\npackage com.example.starwars\n"));
        assert!(contents.contains("enum class Episode {\n    JEDI,\n}\n"));
    }

    #[test]
    fn test_emit_fails_on_blocked_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("com");
        std::fs::write(&blocker, "not a directory").expect("Failed to write");

        let mut emitter = KotlinFileEmitter::new(dir.path());
        let result = emitter.emit(episode());
        assert!(matches!(result, Err(CodegenError::Io(_))));
        assert!(emitter.written().is_empty());
    }
}
