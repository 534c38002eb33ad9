pub mod compress;
pub mod env;
pub mod target;

pub use compress::{HOME_MARKER, compress};
pub use env::Environment;
pub use target::{MAX_PATH_LEN, TargetLength};

#[cfg(test)]
#[ctor::ctor]
fn setup_test_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .with_ansi(true)
        .init();
}
