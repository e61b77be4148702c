//! csvclean entrypoint.

use vibestats::run_clean;
use vibestats::ui::messages::error;

fn main() {
    if let Err(e) = run_clean() {
        error(e);
        std::process::exit(1);
    }
}
