//! FlatWhite3D runtime.
//!
//! Hosts one [`Application`](application::Application) per process: the
//! bootstrap in [`app`] brings up the two-logger facade from [`logging`],
//! asks a factory for the application, runs it and releases it.

pub mod app;
pub mod application;
pub mod logging;

/// Generates `fn main` for a binary that hosts the application built by
/// `$factory`.
///
/// ```ignore
/// fn create_application() -> Option<Box<dyn flatwhite::application::Application>> {
///     Some(Box::new(MyGame::default()))
/// }
///
/// flatwhite::entry_point!(create_application);
/// ```
#[cfg(feature = "entry-point")]
#[macro_export]
macro_rules! entry_point {
    ($factory:expr) => {
        fn main() -> ::std::process::ExitCode {
            $crate::app::main($factory)
        }
    };
}
