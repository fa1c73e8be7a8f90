use crate::error::Result;
use std::path::{Path, PathBuf};

/// Typesets a LaTeX source file into a PDF in the same directory.
///
/// The real implementation shells out to a TeX toolchain and lives with the
/// caller; the core only depends on this seam so the pipeline can be tested
/// without one.
pub trait LatexCompiler {
    fn compile(&self, source_file: &Path) -> Result<PathBuf>;
}
