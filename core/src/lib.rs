pub mod config;
pub mod error;
pub mod natural;

pub use config::Config;
pub use error::NaturalError;
pub use natural::NaturalNumber;

/// Logs an operator-facing success line.
///
/// Events carry the `numflip::success` target so the CLI formatter can
/// render them with a check mark instead of the plain info symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "numflip::success", $($arg)*)
    };
}
