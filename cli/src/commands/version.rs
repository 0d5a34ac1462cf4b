//! Version command

/// Run the version command.
pub fn run() {
    println!("launcher {}", env!("CARGO_PKG_VERSION"));
}
