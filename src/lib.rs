//! # LPub3D Installer
//!
//! Linux desktop integration for the LPub3D installer.
//!
//! During package installation two things happen on Linux: a package archive
//! is placed under the user's launcher entry directory, and a freedesktop
//! `.desktop` entry pointing at the installed binary is created there. This
//! crate implements both as explicit installer hooks.
//!
//! ## Structure
//!
//! - [`entry`] builds the `.desktop` record (pure, deterministic)
//! - [`component`] defines the hook surface the installer engine drives and
//!   the [`component::InstallerOps`] seam it calls back through
//! - [`host`] implements those operations against the local filesystem
//! - [`cli`] is the standalone driver used by the `lpub3d_installer` binary
//!
//! ## Usage
//!
//! ```bash
//! lpub3d_installer --install-root /opt/lpub3d
//! lpub3d_installer --install-root /opt/lpub3d --archive lpub3d-extras.tar.gz
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod component;
pub mod entry;
pub mod error;
pub mod host;

// Re-export main types for public API
pub use cli::Args;
pub use component::{ComponentHooks, DesktopComponent, InstallerOps};
pub use entry::{DesktopEntry, build_entry};
pub use error::{Context, Error, ErrorExt, Result};
pub use host::FsHost;
