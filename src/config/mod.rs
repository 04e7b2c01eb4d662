/// Main configuration module.
///
/// Re-exports submodules for server and game configuration.
pub mod server;
pub mod game;
