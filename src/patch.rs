//! Rewrites corrupted em-dash literals in `indexOf` calls.
//!
//! `Main.java` was at some point saved through a legacy code page, which
//! turned the em-dash inside `indexOf("...")` into mojibake. Other copies kept
//! a raw em-dash, which breaks builds that do not compile as UTF-8. Both forms
//! are rewritten to the Java escape for U+2014 so the source stays ASCII.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::diff::unified_diff;
use crate::error::PatchResult;
use crate::file::{read_text, write_text};

/// File patched by the tool, relative to the working directory
pub const TARGET_PATH: &str = "src/main/java/converter/Main.java";

/// Line printed on stdout after a successful run
pub const CONFIRMATION: &str = "Fixed encoding issues in Main.java";

/// `indexOf("` + U+00E2 U+20AC + `"")`: the UTF-8 em-dash read as a single-byte code page
pub const MOJIBAKE_PATTERN: &str = "indexOf(\"\u{00e2}\u{20ac}\"\")";

/// `indexOf` with a literal, correctly encoded em-dash
pub const EM_DASH_PATTERN: &str = "indexOf(\"\u{2014}\")";

/// `indexOf` with the six ASCII characters of the Java em-dash escape
pub const REPLACEMENT: &str = "indexOf(\"\\u2014\")";

/// A literal find/replace pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Substitution {
    /// Number of non-overlapping occurrences of the pattern
    pub fn count_in(&self, content: &str) -> usize {
        content.matches(self.pattern).count()
    }

    /// Replace every occurrence, returning the new text and how many were replaced
    pub fn apply(&self, content: &str) -> (String, usize) {
        let count = self.count_in(content);
        if count == 0 {
            return (content.to_string(), 0);
        }
        (content.replace(self.pattern, self.replacement), count)
    }
}

/// Substitutions in the order they are applied
pub const SUBSTITUTIONS: [Substitution; 2] = [
    Substitution {
        pattern: MOJIBAKE_PATTERN,
        replacement: REPLACEMENT,
    },
    Substitution {
        pattern: EM_DASH_PATTERN,
        replacement: REPLACEMENT,
    },
];

/// In-memory result of applying [`SUBSTITUTIONS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    /// Occurrences replaced, indexed like `SUBSTITUTIONS`
    pub replaced: [usize; 2],
}

impl Patched {
    pub fn total(&self) -> usize {
        self.replaced.iter().sum()
    }
}

/// Apply both substitutions in sequence. No I/O.
pub fn apply_substitutions(content: &str) -> Patched {
    let mut current = content.to_string();
    let mut replaced = [0; 2];

    for (slot, substitution) in replaced.iter_mut().zip(SUBSTITUTIONS.iter()) {
        let (next, count) = substitution.apply(&current);
        debug!("Replaced {} occurrence(s) of {:?}", count, substitution.pattern);
        *slot = count;
        current = next;
    }

    Patched {
        content: current,
        replaced,
    }
}

/// Outcome of patching (or previewing) a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub replaced_mojibake: usize,
    pub replaced_em_dash: usize,
    pub written: bool,
}

impl PatchReport {
    fn new(path: &Path, patched: &Patched, written: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            replaced_mojibake: patched.replaced[0],
            replaced_em_dash: patched.replaced[1],
            written,
        }
    }

    pub fn total(&self) -> usize {
        self.replaced_mojibake + self.replaced_em_dash
    }
}

/// Read `path`, rewrite both patterns, and write the result back in place.
///
/// The file is rewritten even when neither pattern occurs. Read errors stop
/// before anything is written; write errors may leave the file truncated.
pub fn patch(path: impl AsRef<Path>) -> PatchResult<PatchReport> {
    let path = path.as_ref();
    info!("Patching {}", path.display());

    let original = read_text(path)?;
    let patched = apply_substitutions(&original);
    write_text(path, &patched.content)?;

    let report = PatchReport::new(path, &patched, true);
    info!(
        "Replaced {} corrupted and {} raw em-dash literal(s) in {}",
        report.replaced_mojibake,
        report.replaced_em_dash,
        path.display()
    );
    Ok(report)
}

/// Compute what [`patch`] would change without writing anything.
///
/// Returns the report and a unified diff, empty when nothing would change.
pub fn preview(path: impl AsRef<Path>) -> PatchResult<(PatchReport, String)> {
    let path = path.as_ref();
    info!("Previewing {}", path.display());

    let original = read_text(path)?;
    let patched = apply_substitutions(&original);
    let diff = unified_diff(&path.to_string_lossy(), &original, &patched.content);

    Ok((PatchReport::new(path, &patched, false), diff))
}
