use std::ffi::OsString;

use eyre::WrapErr;

use crate::compress::compress;
use crate::target::TargetLength;

/// The inputs to [compress] that come from outside the program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    pub current_dir: OsString,
    pub home_dir: Option<OsString>,
}

impl Environment {
    pub fn new<C, H>(current_dir: C, home_dir: Option<H>) -> Self
    where
        C: Into<OsString>,
        H: Into<OsString>,
    {
        Self {
            current_dir: current_dir.into(),
            home_dir: home_dir.map(Into::into),
        }
    }

    /// Read the working directory and `$HOME` of this process
    pub fn from_process() -> eyre::Result<Self> {
        let current_dir = std::env::current_dir()
            .wrap_err("Failed to determine the current working directory")?;
        let home_dir = std::env::var_os("HOME");
        tracing::debug!("cwd: {current_dir:?}, HOME: {home_dir:?}");

        Ok(Self {
            current_dir: current_dir.into_os_string(),
            home_dir,
        })
    }

    pub fn with_current_dir<S: Into<OsString>>(mut self, current_dir: S) -> Self {
        self.current_dir = current_dir.into();
        self
    }

    pub fn with_home_dir<S: Into<OsString>>(mut self, home_dir: Option<S>) -> Self {
        self.home_dir = home_dir.map(Into::into);
        self
    }

    /// Shorten the current directory; the result is raw path bytes, not necessarily UTF-8
    pub fn compress(&self, target: TargetLength) -> Vec<u8> {
        compress(
            self.current_dir.as_encoded_bytes(),
            self.home_dir.as_ref().map(|h| h.as_encoded_bytes()),
            target,
        )
    }
}
