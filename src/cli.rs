//! Command line argument parsing and the standalone driver.
//!
//! Standalone, this binary plays the engine's role: it resolves the two path
//! tokens the hooks need and invokes them in the install order (archive
//! extraction first, then operation creation).

use crate::component::{ComponentHooks, DesktopComponent};
use crate::error::{Context, Result};
use crate::host::FsHost;
use clap::Parser;
use std::path::PathBuf;

/// Desktop integration for an installed LPub3D
#[derive(Parser, Debug)]
#[command(
    name = "lpub3d_installer",
    version,
    about = "Create the LPub3D launcher entry and place package files",
    long_about = "Creates the freedesktop launcher entry for an installed LPub3D \
under ~/.local/share/applications, optionally unpacking a package archive there first.

Usage:
  lpub3d_installer --install-root /opt/lpub3d
  lpub3d_installer --install-root /opt/lpub3d --archive lpub3d-extras.tar.gz"
)]
pub struct Args {
    /// Directory the application was installed to
    #[arg(long, value_name = "DIR")]
    pub install_root: PathBuf,

    /// Home directory to integrate into (defaults to the invoking user's home)
    #[arg(long, value_name = "DIR", env = "LPUB3D_HOME_DIR")]
    pub home_dir: Option<PathBuf>,

    /// Package archive (tar.gz) to unpack before creating the launcher entry
    #[arg(long, value_name = "FILE")]
    pub archive: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Run the desktop integration described by `args`.
pub fn run(args: Args) -> Result<()> {
    let home_dir = match args.home_dir {
        Some(dir) => dir,
        None => dirs::home_dir().context("could not determine the user's home directory")?,
    };

    let component = DesktopComponent::new(args.install_root, home_dir)?;
    let mut host = FsHost;

    if let Some(archive) = &args.archive {
        component
            .on_archive_ready(&mut host, archive)
            .context("failed to place package archive")?;
    }

    component
        .on_create_operations(&mut host)
        .context("failed to create desktop entry")?;

    Ok(())
}
