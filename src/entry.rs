//! FreeDesktop.org desktop entry generation for the LPub3D launcher.
//!
//! Builds the `.desktop` record installed to the invoking user's
//! `~/.local/share/applications` directory. All metadata except the `Exec`
//! command line is fixed at compile time; the entry is constructed once per
//! install run and written by a host operation (see [`crate::host`]).

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Launcher entry location relative to the user's home directory.
pub const DESKTOP_FILE_REL_PATH: &str = ".local/share/applications/lpub3d.desktop";

/// Directory under the home dir that holds launcher entries.
///
/// Also the target directory for package archive extraction, see
/// [`crate::component::DesktopComponent::on_archive_ready`].
pub const APPLICATIONS_DIR_REL_PATH: &str = ".local/share/applications";

/// Executable location relative to the install root.
const EXEC_REL_PATH: &str = "app/lpub3d";

/// Launcher field code substituted with the file the entry was opened with.
const FILE_ARG_FIELD_CODE: &str = "%f";

const APP_NAME: &str = "LPub3D";
const ENTRY_TYPE: &str = "Application";
const GENERIC_NAME: &str = "An LDraw Building Instruction Editor";
const COMMENT: &str = "An LDraw Building Instruction Editor";
const TERMINAL: bool = false;
const ICON: &str = "lpub3d";

// The trailing bare "application/" element is carried over from the shipped
// installer data unchanged.
const MIME_TYPES: [&str; 4] = [
    "application/x-ldraw",
    "application/x-multi-part-ldraw",
    "application/x-multipart-ldraw",
    "application/",
];

const CATEGORIES: [&str; 5] = ["Graphics", "3DGraphics", "Education", "Design", "Application"];

const KEYWORDS: [&str; 6] = ["Instructions", "CAD", "LEGO", "LDraw", "Renderer", "Editor"];

/// Separator for list-valued desktop entry fields.
const LIST_SEPARATOR: &str = ";";

/// A launcher entry record for the application.
///
/// Field order in the serialized form is fixed: Name, Type, GenericName,
/// Comment, Exec, Terminal, Icon, MimeType, Categories, Keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Display name shown in the launcher.
    pub name: String,
    /// Entry type, always `Application` for this record.
    pub entry_type: String,
    /// Short description.
    pub generic_name: String,
    /// Tooltip text.
    pub comment: String,
    /// Command line, including the file argument field code.
    pub exec: String,
    /// Whether launching requires a terminal window.
    pub terminal: bool,
    /// Icon name, resolved by the launcher's icon theme.
    pub icon: String,
    /// MIME types this application registers as a handler for.
    pub mime_types: Vec<String>,
    /// Launcher menu categories.
    pub categories: Vec<String>,
    /// Launcher search keywords.
    pub keywords: Vec<String>,
}

impl DesktopEntry {
    /// Create the LPub3D entry for an application installed at `install_root`.
    ///
    /// Fails with [`Error::MissingInput`] when `install_root` is empty; every
    /// field of the record is required.
    pub fn for_install_root(install_root: &Path) -> Result<Self> {
        if install_root.as_os_str().is_empty() {
            return Err(Error::MissingInput("install root path"));
        }

        Ok(Self {
            name: APP_NAME.into(),
            entry_type: ENTRY_TYPE.into(),
            generic_name: GENERIC_NAME.into(),
            comment: COMMENT.into(),
            exec: format!(
                "{}/{} {}",
                install_root.display(),
                EXEC_REL_PATH,
                FILE_ARG_FIELD_CODE
            ),
            terminal: TERMINAL,
            icon: ICON.into(),
            mime_types: MIME_TYPES.iter().map(|s| s.to_string()).collect(),
            categories: CATEGORIES.iter().map(|s| s.to_string()).collect(),
            keywords: KEYWORDS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Serialize as `Key=Value` lines in the fixed field order.
    ///
    /// Ten lines joined with `\n`, no trailing newline.
    pub fn to_entry_string(&self) -> String {
        let lines = [
            format!("Name={}", self.name),
            format!("Type={}", self.entry_type),
            format!("GenericName={}", self.generic_name),
            format!("Comment={}", self.comment),
            format!("Exec={}", self.exec),
            format!("Terminal={}", self.terminal),
            format!("Icon={}", self.icon),
            format!("MimeType={}", self.mime_types.join(LIST_SEPARATOR)),
            format!("Categories={}", self.categories.join(LIST_SEPARATOR)),
            format!("Keywords={}", self.keywords.join(LIST_SEPARATOR)),
        ];
        lines.join("\n")
    }
}

/// Build the launcher entry for an install run.
///
/// Returns the destination path under `home_dir` and the exact file contents
/// to write there. Pure and deterministic: performs no I/O and leaves writing
/// (and parent directory creation) to the caller's host operation.
pub fn build_entry(install_root: &Path, home_dir: &Path) -> Result<(PathBuf, String)> {
    if home_dir.as_os_str().is_empty() {
        return Err(Error::MissingInput("home directory path"));
    }

    let entry = DesktopEntry::for_install_root(install_root)?;
    let destination = home_dir.join(DESKTOP_FILE_REL_PATH);

    Ok((destination, entry.to_entry_string()))
}
