use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::CompileConfig;

/// Stand-in for `glslc`: fails when the source mentions `error`, otherwise
/// copies the source to the output. Invoked as `sh <script> <src> -o <out>`.
const FAKE_COMPILER: &str = r#"src="$1"
out="$3"
if grep -q error "$src"; then
    echo "$src: error: compilation failed" >&2
    exit 1
fi
cp "$src" "$out"
"#;

pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let _ = pretty_env_logger::try_init();
        let path = std::env::temp_dir().join(format!("twopi-shader-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn fake_compiler_config(&self) -> CompileConfig {
        let script = self.write("fake-glslc.sh", FAKE_COMPILER);
        CompileConfig::default()
            .with_directory(&self.path)
            .with_compiler("sh")
            .with_extra_args([script.display().to_string()])
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
