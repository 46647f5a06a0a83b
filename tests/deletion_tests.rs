mod common;

use common::MemoryCatalog;
use std::fs;
use std::path::Path;
use subsync::deletion::{delete_submission, erase_directory_tree, purge_all};
use subsync::Error;
use tempfile::tempdir;

#[test]
fn test_single_delete_removes_the_whole_submission_directory() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("submissions");
    let sub1 = root.join("sub1");
    fs::create_dir_all(&sub1).unwrap();
    let f = sub1.join("f.txt");
    fs::write(&f, "f").unwrap();
    fs::write(sub1.join("g.txt"), "g").unwrap();

    let catalog = MemoryCatalog::with_entries(vec![("f.txt", f.to_str().unwrap())]);
    delete_submission(&catalog, "f.txt", &f).unwrap();

    assert!(catalog.is_empty());
    assert!(!sub1.exists());
    assert!(root.exists());
}

#[test]
fn test_single_delete_with_missing_parent_still_drops_the_entry() {
    let catalog = MemoryCatalog::with_entries(vec![("f.txt", "/nope/sub/f.txt")]);
    delete_submission(&catalog, "f.txt", Path::new("/nope/sub/f.txt")).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_single_delete_clears_nested_submission_content() {
    let tmp = tempdir().unwrap();
    let sub = tmp.path().join("submissions").join("carol");
    fs::create_dir_all(sub.join("attachments")).unwrap();
    let f = sub.join("essay.txt");
    fs::write(&f, "essay").unwrap();
    fs::write(sub.join("attachments").join("data.csv"), "1,2").unwrap();

    let catalog = MemoryCatalog::with_entries(vec![("essay.txt", f.to_str().unwrap())]);
    delete_submission(&catalog, "essay.txt", &f).unwrap();

    assert!(!sub.exists());
}

#[test]
fn test_purge_erases_children_but_keeps_the_root() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("submissions");
    fs::create_dir_all(root.join("a/deep")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a/one.txt"), "1").unwrap();
    fs::write(root.join("a/deep/two.txt"), "2").unwrap();
    fs::write(root.join("b/three.txt"), "3").unwrap();

    let catalog = MemoryCatalog::with_entries(vec![("one.txt", "/x"), ("two.txt", "/y")]);
    let summary = purge_all(&catalog, &root).unwrap();

    assert!(catalog.is_empty());
    assert_eq!(summary.failed, 0);
    assert!(root.exists());
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn test_purge_with_missing_root_leaves_catalog_untouched() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("nope");

    let catalog = MemoryCatalog::with_entries(vec![("one.txt", "/x")]);
    let err = purge_all(&catalog, &root).unwrap_err();

    assert!(matches!(err, Error::DirectoryNotFound(_)));
    assert_eq!(catalog.mutations.get(), 0);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_erase_with_missing_root_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = erase_directory_tree(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, Error::DirectoryNotFound(_)));
}

#[cfg(unix)]
#[test]
fn test_erase_continues_past_undeletable_entries() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempdir().unwrap();
    let root = tmp.path().join("submissions");
    let locked = root.join("locked");
    let open = root.join("open");
    fs::create_dir_all(&locked).unwrap();
    fs::create_dir_all(&open).unwrap();
    fs::write(locked.join("a.txt"), "a").unwrap();
    fs::write(open.join("b.txt"), "b").unwrap();

    // Dropping write permission makes entries inside undeletable. A
    // privileged user bypasses this, in which case the erase just
    // succeeds for the whole tree.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let summary = erase_directory_tree(&root).unwrap();

    assert!(!open.exists());
    assert!(summary.removed >= 2);

    if locked.exists() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
