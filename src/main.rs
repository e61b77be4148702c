//! vibestats main entrypoint.

use vibestats::run;
use vibestats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
