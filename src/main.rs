//! attendlog main entrypoint.

use attendlog::run;
use attendlog::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(e.exit_code());
    }
}
