//! cl - country and language lookups from the command line

use countrylang::ui::output;

fn main() {
    if let Err(e) = countrylang::cli::run() {
        output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
