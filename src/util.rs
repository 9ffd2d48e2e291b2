/// Print a status line with the tool prefix
pub fn message(message: impl std::fmt::Display) {
    println!("\x1b[1;32m[hello-nx]\x1b[0m {message}");
}

/// Print an error status line with the tool prefix
pub fn error_message(message: impl std::fmt::Display) {
    println!("\x1b[1;31m[hello-nx]\x1b[0m {message}");
}
