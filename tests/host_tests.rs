//! Filesystem host operation tests.

use flate2::{Compression, write::GzEncoder};
use lpub3d_installer::component::{ComponentHooks, DesktopComponent, InstallerOps};
use lpub3d_installer::host::FsHost;
use std::fs::{self, File};
use std::path::Path;

/// Build a small tar.gz containing one file, the shape the package archives
/// ship in.
fn write_test_archive(dest: &Path, member_name: &str, member_contents: &[u8]) {
    let file = File::create(dest).unwrap();
    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);

    let mut header = tar::Header::new_gnu();
    header.set_size(member_contents.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    tar.append_data(&mut header, member_name, member_contents)
        .unwrap();

    tar.into_inner().unwrap().finish().unwrap();
}

#[test]
fn create_file_entry_creates_parent_dirs_and_exact_bytes() {
    let home = tempfile::tempdir().unwrap();
    let dest = home
        .path()
        .join(".local/share/applications/lpub3d.desktop");

    let mut host = FsHost;
    host.create_file_entry(&dest, "Name=LPub3D\nType=Application")
        .unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "Name=LPub3D\nType=Application"
    );
}

#[test]
fn create_file_entry_overwrites_existing_file() {
    let home = tempfile::tempdir().unwrap();
    let dest = home.path().join("lpub3d.desktop");
    fs::write(&dest, "stale").unwrap();

    let mut host = FsHost;
    host.create_file_entry(&dest, "fresh").unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh");
}

#[test]
fn extract_archive_unpacks_into_destination() {
    let work = tempfile::tempdir().unwrap();
    let archive = work.path().join("pkg.tar.gz");
    write_test_archive(&archive, "lpub3d.png", b"icon bytes");

    let dest = work.path().join("out");
    let mut host = FsHost;
    host.extract_archive(&archive, &dest).unwrap();

    assert_eq!(fs::read(dest.join("lpub3d.png")).unwrap(), b"icon bytes");
}

#[test]
fn extract_archive_fails_for_missing_archive() {
    let work = tempfile::tempdir().unwrap();
    let mut host = FsHost;

    let err = host
        .extract_archive(&work.path().join("nope.tar.gz"), work.path())
        .unwrap_err();
    assert!(err.to_string().contains("opening package archive"));
}

#[test]
fn hooks_against_fs_host_produce_real_files() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let archive = work.path().join("pkg.tar.gz");
    write_test_archive(&archive, "lpub3d.xml", b"<mime/>");

    let component = DesktopComponent::new("/opt/lpub3d", home.path()).unwrap();
    let mut host = FsHost;

    component.on_archive_ready(&mut host, &archive).unwrap();
    component.on_create_operations(&mut host).unwrap();

    let apps_dir = home.path().join(".local/share/applications");
    assert!(apps_dir.join("lpub3d.xml").exists());

    let desktop = fs::read_to_string(apps_dir.join("lpub3d.desktop")).unwrap();
    assert_eq!(desktop.lines().count(), 10);
    assert!(desktop.contains("Exec=/opt/lpub3d/app/lpub3d %f"));
}
