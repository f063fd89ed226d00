use jvis::ignore::{Exclusions, SKIP_DIRS, SKIP_EXTENSIONS};
use std::path::Path;

#[test]
fn test_every_skip_dir_is_excluded_at_any_depth() {
    let exclusions = Exclusions::new().unwrap();
    for dir in SKIP_DIRS {
        assert!(exclusions.is_excluded(Path::new(dir), false), "{dir} at root");
        let nested = format!("server/src/{dir}");
        assert!(exclusions.is_excluded(Path::new(&nested), false), "{nested}");
        let inside = format!("client/{dir}/items/item.txt");
        assert!(exclusions.is_excluded(Path::new(&inside), true), "{inside}");
    }
}

#[test]
fn test_every_skip_extension_is_excluded_for_files() {
    let exclusions = Exclusions::new().unwrap();
    for ext in SKIP_EXTENSIONS {
        let file = format!("pkg/item.{ext}");
        assert!(exclusions.is_excluded(Path::new(&file), true), "{file}");
    }
}

#[test]
fn test_similar_names_are_not_excluded() {
    let exclusions = Exclusions::new().unwrap();
    for path in [
        "src/git/item.py",
        "node_modules_backup.txt",
        "src/venv/item.py",
        "item.pyi",
        "items.solid",
    ] {
        assert!(!exclusions.is_excluded(Path::new(path), true), "{path}");
    }
    assert!(!exclusions.is_excluded(Path::new("src/my.git.dir"), false));
}
