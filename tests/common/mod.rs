pub mod fixtures;

use petty_fontset::{FontError, FontParser, FontProgram, FontProgramParser, SharedFontData};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `data` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)
}

/// The default parser, counting how often it runs.
#[derive(Debug, Default)]
pub struct CountingParser {
    inner: FontParser,
    calls: AtomicUsize,
}

impl CountingParser {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FontProgramParser for CountingParser {
    fn parse(&self, data: SharedFontData) -> Result<FontProgram, FontError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.parse(data)
    }

    fn name(&self) -> &'static str {
        "CountingParser"
    }
}
