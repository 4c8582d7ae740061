//! Binary entry point for `mrd`.

use meridian_cli::{cli, ui};

fn main() {
    if let Err(e) = cli::run() {
        ui::output::error(format!("{e:#}"));
        std::process::exit(1);
    }
}
