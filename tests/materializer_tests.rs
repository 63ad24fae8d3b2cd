use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use copy_images::materializer::{copy_into, ensure_target_dir, CopyPlan};
use copy_images::{Materializer, SilentReporter, TargetMapping};

fn add_target(targets: &mut TargetMapping, dir: &Path, names: &[&str]) {
    targets.insert(
        dir.to_path_buf(),
        names.iter().map(|n| n.to_string()).collect(),
    );
}

fn single_target(dir: &Path, names: &[&str]) -> TargetMapping {
    let mut targets = TargetMapping::default();
    add_target(&mut targets, dir, names);
    targets
}

/// Layout:
///   site/
///     img/a.png         ("png a")
///     img/b.jpg         ("jpg b")
///     2019/04/a.png     ("older png a")  ← same base name as img/a.png
///     index.html
fn create_site(root: &Path) -> PathBuf {
    let site = root.join("site");
    fs::create_dir_all(site.join("img")).unwrap();
    fs::create_dir_all(site.join("2019/04")).unwrap();
    fs::write(site.join("img/a.png"), "png a").unwrap();
    fs::write(site.join("img/b.jpg"), "jpg b").unwrap();
    fs::write(site.join("2019/04/a.png"), "older png a").unwrap();
    fs::write(site.join("index.html"), "<html></html>").unwrap();
    site
}

#[test]
fn test_single_file_is_copied() {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("site");
    fs::create_dir_all(site.join("img")).unwrap();
    fs::write(site.join("img/a.png"), "png bytes").unwrap();
    let dest = tmp.path().join("ghost/content/images");

    let materializer = Materializer::new();
    let targets = single_target(&dest, &["a.png"]);
    let planned = materializer.build_plan(&targets, &site, &SilentReporter);
    let outcome = materializer.execute(&planned.plan, &SilentReporter);

    assert_eq!(planned.dir_errors, 0);
    assert_eq!(outcome.copied, 1);
    assert_eq!(outcome.errors, 0);
    assert_eq!(fs::read(dest.join("a.png")).unwrap(), b"png bytes");
}

#[test]
fn test_every_same_named_source_is_queued() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let dest = tmp.path().join("ghost/posts/a");

    let materializer = Materializer::new();
    let sources = materializer.find_sources(&site, &["a.png".to_string()]);

    assert_eq!(sources.len(), 2);
    assert!(sources.contains(&site.join("img/a.png")));
    assert!(sources.contains(&site.join("2019/04/a.png")));

    let targets = single_target(&dest, &["a.png"]);
    let planned = materializer.build_plan(&targets, &site, &SilentReporter);
    assert_eq!(planned.plan.total_copies(), 2);

    let outcome = materializer.execute(&planned.plan, &SilentReporter);
    assert_eq!(outcome.copied, 2);
    assert_eq!(outcome.errors, 0);
    assert!(dest.join("a.png").is_file());
}

#[test]
fn test_plan_keys_match_targets_and_dirs_exist() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let first = tmp.path().join("ghost/one");
    let second = tmp.path().join("ghost/two/nested");

    let materializer = Materializer::new();
    let mut targets = TargetMapping::default();
    add_target(&mut targets, &first, &["b.jpg"]);
    add_target(&mut targets, &second, &["missing.gif"]);
    let planned = materializer.build_plan(&targets, &site, &SilentReporter);

    assert_eq!(planned.plan.target_count(), 2);
    assert_eq!(planned.plan.sources_for(&first).unwrap().len(), 1);
    assert!(planned.plan.sources_for(&second).unwrap().is_empty());
    assert!(first.is_dir());
    assert!(second.is_dir());
}

#[test]
fn test_failed_copy_does_not_stop_others() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let dest = tmp.path().join("ghost/dest");
    ensure_target_dir(&dest).unwrap();

    let mut plan = CopyPlan::default();
    plan.insert(
        dest.clone(),
        vec![site.join("img/vanished.png"), site.join("img/b.jpg")],
    );

    let outcome = Materializer::new().execute(&plan, &SilentReporter);

    assert_eq!(outcome.copied, 1);
    assert_eq!(outcome.errors, 1);
    assert_eq!(fs::read(dest.join("b.jpg")).unwrap(), b"jpg b");
    assert!(!dest.join("vanished.png").exists());
}

#[test]
fn test_materializing_twice_is_idempotent() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let dest = tmp.path().join("ghost/again");
    let targets = single_target(&dest, &["b.jpg"]);
    let materializer = Materializer::new();

    for _ in 0..2 {
        let planned = materializer.build_plan(&targets, &site, &SilentReporter);
        let outcome = materializer.execute(&planned.plan, &SilentReporter);
        assert_eq!(planned.dir_errors, 0);
        assert_eq!(outcome.copied, 1);
        assert_eq!(outcome.errors, 0);
    }

    assert_eq!(fs::read(dest.join("b.jpg")).unwrap(), b"jpg b");
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
}

#[test]
fn test_copy_overwrites_existing_destination() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let dest = tmp.path().join("ghost/overwrite");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("b.jpg"), "stale").unwrap();

    let written = copy_into(&site.join("img/b.jpg"), &dest).unwrap();

    assert_eq!(written, dest.join("b.jpg"));
    assert_eq!(fs::read(&written).unwrap(), b"jpg b");
}

#[test]
fn test_target_dir_blocked_by_file_is_counted() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let blocker = tmp.path().join("ghost");
    fs::write(&blocker, "not a directory").unwrap();
    let dest = blocker.join("posts");

    let materializer = Materializer::new();
    let targets = single_target(&dest, &["b.jpg"]);
    let planned = materializer.build_plan(&targets, &site, &SilentReporter);
    let outcome = materializer.execute(&planned.plan, &SilentReporter);

    assert_eq!(planned.dir_errors, 1);
    assert_eq!(planned.plan.total_copies(), 1);
    assert_eq!(outcome.copied, 0);
    assert_eq!(outcome.errors, 1);
}

#[test]
fn test_ignore_patterns_prune_the_walk() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());

    let materializer = Materializer::with_ignore_patterns(&["**/2019/**".to_string()]);
    let sources = materializer.find_sources(&site, &["a.png".to_string()]);

    assert_eq!(sources, vec![site.join("img/a.png")]);
}

#[test]
fn test_missing_site_dir_finds_nothing() {
    let tmp = tempdir().unwrap();
    let sources = Materializer::new()
        .find_sources(&tmp.path().join("no-such-site"), &["a.png".to_string()]);
    assert!(sources.is_empty());
}

#[test]
fn test_rerun_with_destination_inside_site_keeps_content() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let dest = site.join("zghost/content/images");
    let targets = single_target(&dest, &["b.jpg"]);
    let materializer = Materializer::new();

    let planned = materializer.build_plan(&targets, &site, &SilentReporter);
    let first = materializer.execute(&planned.plan, &SilentReporter);
    assert_eq!(first.copied, 1);
    assert_eq!(first.errors, 0);

    // The earlier copy is now found as a source too; copying it onto itself
    // is refused and counted.
    let planned = materializer.build_plan(&targets, &site, &SilentReporter);
    assert_eq!(planned.plan.total_copies(), 2);
    let second = materializer.execute(&planned.plan, &SilentReporter);
    assert_eq!(second.copied, 1);
    assert_eq!(second.errors, 1);
    assert_eq!(fs::read(dest.join("b.jpg")).unwrap(), b"jpg b");
}

#[test]
fn test_copy_onto_itself_is_an_error() {
    let tmp = tempdir().unwrap();
    let site = create_site(tmp.path());
    let img = site.join("img");

    let err = copy_into(&img.join("b.jpg"), &img).unwrap_err();

    assert!(matches!(err, copy_images::Error::Copy { .. }));
    assert_eq!(fs::read(img.join("b.jpg")).unwrap(), b"jpg b");
}

#[test]
fn test_site_dir_that_is_a_file_finds_nothing() {
    let tmp = tempdir().unwrap();
    let site_file = tmp.path().join("a.png");
    fs::write(&site_file, "png a").unwrap();

    let sources = Materializer::new().find_sources(&site_file, &["a.png".to_string()]);

    assert!(sources.is_empty());
}
