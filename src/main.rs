//! rWorklog main entrypoint.

use rworklog::errors::ErrorKind;
use rworklog::run;
use rworklog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        match e.kind() {
            ErrorKind::Storage => error(format!("Operation failed: {}", e)),
            _ => error(e),
        }
        std::process::exit(1);
    }
}
