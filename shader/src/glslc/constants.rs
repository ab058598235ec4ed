pub const DEFAULT_COMPILER: &str = if cfg!(windows) { "glslc.exe" } else { "glslc" };
pub const SOURCE_EXTENSIONS: [&str; 2] = ["vert", "frag"];
pub const OUTPUT_EXTENSION: &str = "spv";
pub const OUTPUT_FLAG: &str = "-o";
