//! Filesystem-backed host operations.
//!
//! Inside the installer runtime, file writes and archive extraction are
//! engine primitives. [`FsHost`] provides the same primitives against the
//! local filesystem so the hooks can run standalone.

use crate::component::InstallerOps;
use crate::error::{ErrorExt, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::Path;
use tar::Archive;

/// Host operations executed directly against the local filesystem.
///
/// Archives are expected to be gzip-compressed tarballs, the format the
/// Linux packages ship in.
#[derive(Debug, Default)]
pub struct FsHost;

impl InstallerOps for FsHost {
    fn extract_archive(&mut self, archive: &Path, dest_dir: &Path) -> Result<()> {
        fs::create_dir_all(dest_dir).fs_context("creating extraction directory", dest_dir)?;

        let file = File::open(archive).fs_context("opening package archive", archive)?;
        let mut tar = Archive::new(GzDecoder::new(file));
        tar.unpack(dest_dir)
            .fs_context("extracting package archive", dest_dir)?;

        log::info!(
            "extracted {} to {}",
            archive.display(),
            dest_dir.display()
        );
        Ok(())
    }

    fn create_file_entry(&mut self, dest: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).fs_context("creating desktop file directory", parent)?;
        }
        fs::write(dest, contents).fs_context("creating desktop file", dest)?;

        log::info!("created desktop entry {}", dest.display());
        Ok(())
    }
}
