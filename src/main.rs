//! mmpbquiz main entrypoint.

use mmpbquiz::run;
use mmpbquiz::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
