//! `waggle version` — print the agent version.

/// Print the version line. Also used by the `--version` shortcut in `main`,
/// which runs before any config is loaded.
pub fn run() {
    println!("waggle {}", env!("CARGO_PKG_VERSION"));
}
