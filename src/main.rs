//! LPub3D installer - Linux desktop integration.
//!
//! Standalone driver for the install hooks: unpacks the package archive into
//! the user's launcher entry directory when given one, then creates the
//! `.desktop` entry for the installed application.

use lpub3d_installer::cli::{self, Args};
use std::process;

fn main() {
    env_logger::init();

    let args = Args::parse_args();

    if let Err(e) = cli::run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
