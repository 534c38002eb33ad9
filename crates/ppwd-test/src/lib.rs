use std::path::{Path, PathBuf};
use std::process::Output;

pub use assert_cmd::Command;

pub trait CommandExt {
    /// Same as [Command::output] except with hooks to print stdout/stderr in failed tests
    fn captured_output(&mut self) -> std::io::Result<Output>;
}

impl CommandExt for Command {
    fn captured_output(&mut self) -> std::io::Result<Output> {
        let output = self.output()?;

        // libtest injects magic in print! macros to capture output in tests
        print!("{}", String::from_utf8_lossy(&output.stdout));
        eprint!("{}", String::from_utf8_lossy(&output.stderr));

        Ok(output)
    }
}

/// A temporary directory tree to run the tool from
pub struct TempTree {
    // Held to delete the tree on drop
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl TempTree {
    /// Create a temporary directory containing the given relative subdirectory
    ///
    /// The root is canonicalized, because the OS reports the resolved working directory
    /// (e.g. `/private/var/...` instead of `/var/...` on macOS).
    pub fn new<P: AsRef<Path>>(subdir: P) -> eyre::Result<Self> {
        let dir = tempfile::tempdir()?;
        let root = std::fs::canonicalize(dir.path())?;
        std::fs::create_dir_all(root.join(subdir))?;
        Ok(Self { _dir: dir, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a directory inside the tree
    pub fn join<P: AsRef<Path>>(&self, subdir: P) -> PathBuf {
        self.root.join(subdir)
    }
}

/// Get a command to run the given tool binary.
///
/// Uses `CARGO_BIN_EXE_<name>` which cargo sets at compile time for
/// integration tests in the same crate as the binary.
///
/// # Example
/// ```ignore
/// use ppwd_test::{tool, CommandExt};
///
/// let output = tool!("ppwd")
///     .arg("-20")
///     .captured_output()
///     .unwrap();
/// ```
#[macro_export]
macro_rules! tool {
    ($name:literal) => {{
        let mut cmd = $crate::Command::new(env!(concat!("CARGO_BIN_EXE_", $name)));
        cmd.arg("--log-level=TRACE");
        cmd
    }};
}
