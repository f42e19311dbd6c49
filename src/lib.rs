// fix-encoding - repairs corrupted em-dash literals in the converter's Main.java
// Rewrites both the mojibake and the raw em-dash forms to a Java unicode escape

pub mod config;
pub mod diff;
pub mod error;
pub mod error_handling;
pub mod file;
pub mod logging;
pub mod patch;

pub use error::{PatchError, PatchResult};
pub use patch::{apply_substitutions, patch, preview, PatchReport};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
