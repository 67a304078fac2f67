//! Installer hook points for the desktop integration component.
//!
//! The installer engine drives installation; this component only customizes
//! two steps of it. [`ComponentHooks`] is the registration surface the engine
//! calls into, and [`InstallerOps`] is the handle to the engine primitives the
//! component consumes. Both paths the component needs (install root and home
//! directory) are resolved by the engine and passed in explicitly.

use crate::entry::{APPLICATIONS_DIR_REL_PATH, build_entry};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Engine-provided primitives consumed by the component.
pub trait InstallerOps {
    /// Extract a package archive into `dest_dir`.
    fn extract_archive(&mut self, archive: &Path, dest_dir: &Path) -> Result<()>;

    /// Create a text file at `dest` with exact contents, replacing any
    /// existing file and creating parent directories as needed.
    fn create_file_entry(&mut self, dest: &Path, contents: &str) -> Result<()>;
}

/// Hooks invoked by the installer engine during an install run.
///
/// Each hook runs at most once per run; the engine decides the order.
pub trait ComponentHooks {
    /// Called when a package archive belonging to this component is about to
    /// be extracted.
    fn on_archive_ready(&self, ops: &mut dyn InstallerOps, archive: &Path) -> Result<()>;

    /// Called when the component should queue its install operations.
    fn on_create_operations(&self, ops: &mut dyn InstallerOps) -> Result<()>;
}

/// Desktop integration component for the application.
///
/// Redirects archive extraction into the user's launcher entry directory and
/// creates the `.desktop` file there.
#[derive(Debug, Clone)]
pub struct DesktopComponent {
    install_root: PathBuf,
    home_dir: PathBuf,
}

impl DesktopComponent {
    /// Create the component for one install run.
    ///
    /// `install_root` is where the application was installed, `home_dir` is
    /// the invoking user's home directory. Both are required.
    pub fn new(install_root: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Result<Self> {
        let install_root = install_root.into();
        let home_dir = home_dir.into();

        if install_root.as_os_str().is_empty() {
            return Err(Error::MissingInput("install root path"));
        }
        if home_dir.as_os_str().is_empty() {
            return Err(Error::MissingInput("home directory path"));
        }

        Ok(Self {
            install_root,
            home_dir,
        })
    }

    /// Directory the component extracts package archives into.
    pub fn applications_dir(&self) -> PathBuf {
        self.home_dir.join(APPLICATIONS_DIR_REL_PATH)
    }
}

impl ComponentHooks for DesktopComponent {
    /// Extract to the launcher entry directory instead of the engine's
    /// default target.
    fn on_archive_ready(&self, ops: &mut dyn InstallerOps, archive: &Path) -> Result<()> {
        let dest = self.applications_dir();
        log::debug!(
            "redirecting archive {} to {}",
            archive.display(),
            dest.display()
        );
        ops.extract_archive(archive, &dest)
    }

    fn on_create_operations(&self, ops: &mut dyn InstallerOps) -> Result<()> {
        let (dest, contents) = build_entry(&self.install_root, &self.home_dir)?;
        log::debug!("creating desktop entry at {}", dest.display());
        ops.create_file_entry(&dest, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every operation requested of the engine.
    #[derive(Default)]
    struct RecordingOps {
        extracted: Vec<(PathBuf, PathBuf)>,
        created: Vec<(PathBuf, String)>,
    }

    impl InstallerOps for RecordingOps {
        fn extract_archive(&mut self, archive: &Path, dest_dir: &Path) -> Result<()> {
            self.extracted
                .push((archive.to_path_buf(), dest_dir.to_path_buf()));
            Ok(())
        }

        fn create_file_entry(&mut self, dest: &Path, contents: &str) -> Result<()> {
            self.created.push((dest.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    #[test]
    fn archive_is_redirected_to_applications_dir() {
        let component = DesktopComponent::new("/opt/lpub3d", "/home/alice").unwrap();
        let mut ops = RecordingOps::default();

        component
            .on_archive_ready(&mut ops, Path::new("pkg/lpub3d.tar.gz"))
            .unwrap();

        assert_eq!(
            ops.extracted,
            vec![(
                PathBuf::from("pkg/lpub3d.tar.gz"),
                PathBuf::from("/home/alice/.local/share/applications")
            )]
        );
        assert!(ops.created.is_empty());
    }

    #[test]
    fn create_operations_writes_one_entry() {
        let component = DesktopComponent::new("/opt/lpub3d", "/home/alice").unwrap();
        let mut ops = RecordingOps::default();

        component.on_create_operations(&mut ops).unwrap();

        assert_eq!(ops.created.len(), 1);
        let (dest, contents) = &ops.created[0];
        assert_eq!(
            dest,
            Path::new("/home/alice/.local/share/applications/lpub3d.desktop")
        );
        assert!(contents.starts_with("Name=LPub3D\n"));
        assert!(contents.contains("\nExec=/opt/lpub3d/app/lpub3d %f\n"));
    }

    #[test]
    fn empty_paths_are_rejected_at_construction() {
        assert!(DesktopComponent::new("", "/home/alice").is_err());
        assert!(DesktopComponent::new("/opt/lpub3d", "").is_err());
    }
}
