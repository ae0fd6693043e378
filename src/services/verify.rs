use std::fs;
use std::path::{Path, PathBuf};

const INIT_FILE: &str = "__init__.py";
const EXCLUDED_DIRS: &[&str] = &["__pycache__"];

/// Directories under `root` that need an initializer file but lack one.
///
/// A directory needs one if it directly contains a `.py` file, or if a
/// violation exists somewhere below it. The walk is depth-first and the
/// "missing" flag propagates upward, so an unresolved violation deep in the
/// tree also flags every uninitialized ancestor — but a fully initialized
/// subpackage does not. Violations are collected in one pass.
pub fn missing_inits(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut violations = Vec::new();
    walk(root, &mut violations)?;
    Ok(violations)
}

/// Returns whether `dir` or any descendant is missing an initializer.
fn walk(dir: &Path, violations: &mut Vec<PathBuf>) -> anyhow::Result<bool> {
    let mut has_init = false;
    let mut has_pyfiles = false;
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type()?.is_dir() {
            if !EXCLUDED_DIRS.iter().any(|e| name == *e) {
                subdirs.push(entry.path());
            }
        } else {
            if name == INIT_FILE {
                has_init = true;
            }
            if entry.path().extension().map(|e| e == "py").unwrap_or(false) {
                has_pyfiles = true;
            }
        }
    }

    let mut missing_in_subdir = false;
    for sub in subdirs {
        missing_in_subdir = walk(&sub, violations)? || missing_in_subdir;
    }

    let init_needed = has_pyfiles || missing_in_subdir;
    if init_needed && !has_init {
        violations.push(dir.to_path_buf());
        return Ok(true);
    }
    Ok(missing_in_subdir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, "").expect("touch");
    }

    #[test]
    fn complete_tree_has_no_violations() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path().join("pkg");
        touch(&root.join("__init__.py"));
        touch(&root.join("core.py"));
        touch(&root.join("sub/__init__.py"));
        touch(&root.join("sub/util.py"));

        assert!(missing_inits(&root).expect("walk").is_empty());
    }

    #[test]
    fn subdirectory_with_py_file_and_no_init_is_flagged() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path().join("pkg");
        touch(&root.join("__init__.py"));
        touch(&root.join("sub/util.py"));

        let violations = missing_inits(&root).expect("walk");
        assert_eq!(violations, vec![root.join("sub")]);
    }

    #[test]
    fn missing_flag_propagates_to_uninitialized_ancestors() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path().join("pkg");
        touch(&root.join("outer/inner/deep.py"));

        let violations = missing_inits(&root).expect("walk");
        // Depth-first: deepest violation first, then each ancestor.
        assert_eq!(
            violations,
            vec![
                root.join("outer/inner"),
                root.join("outer"),
                root.clone(),
            ]
        );
    }

    #[test]
    fn initialized_subpackage_does_not_flag_uninitialized_ancestor() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path().join("pkg");
        // Ancestor holds no .py files; the subpackage below is complete,
        // so no missing flag reaches it.
        touch(&root.join("sub/__init__.py"));
        touch(&root.join("sub/util.py"));
        touch(&root.join("notes.txt"));

        assert!(missing_inits(&root).expect("walk").is_empty());
    }

    #[test]
    fn pycache_and_data_only_directories_are_ignored() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path().join("pkg");
        touch(&root.join("__init__.py"));
        touch(&root.join("main.py"));
        touch(&root.join("__pycache__/main.cpython-311.pyc"));
        touch(&root.join("resources/data.csv"));

        assert!(missing_inits(&root).expect("walk").is_empty());
    }
}
