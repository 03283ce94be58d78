//! Report serialization and rendering.
//!
//! Converts a finished domain tree into the JSON document the mind-map page
//! consumes, and writes the timestamped HTML report file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use crate::config::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::error_handling::RenderError;
use crate::tree::DomainTree;

/// Mind-map page the serialized tree is substituted into. The placeholder
/// sits inside a `<script>` block as `var jsondata = __TREE_DATA__;`.
const REPORT_TEMPLATE: &str = include_str!("template.html");

const TREE_DATA_PLACEHOLDER: &str = "__TREE_DATA__";

/// Serializes the tree into the document embedded in the report.
///
/// Keys serialize in sorted order (the tree is backed by a `BTreeMap`), so
/// the output is deterministic for a given tree. `&`, `<` and `>` are
/// escaped as `\u0026`, `\u003c` and `\u003e`, keeping the document inert
/// inside a script block while remaining valid JSON.
pub fn to_embedded_json(tree: &DomainTree) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(tree)?;
    Ok(json
        .replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e"))
}

/// Renders the HTML report for a finished tree.
///
/// Creates `report_dir` if it does not exist and writes
/// `assetviz_report_<YYYY-MM-DD_HH-MM-SS>.html` (local time) into it.
///
/// # Errors
///
/// Returns a [`RenderError`] if the tree cannot be encoded or the directory
/// or file cannot be written.
pub fn render_report(tree: &DomainTree, report_dir: &Path) -> Result<PathBuf, RenderError> {
    let jsondata = to_embedded_json(tree)?;

    let timestamp = Local::now().format(REPORT_TIMESTAMP_FORMAT);
    let file_name = format!("{REPORT_FILE_PREFIX}{timestamp}.html");

    fs::create_dir_all(report_dir)?;
    let report_path = report_dir.join(file_name);

    let html = REPORT_TEMPLATE.replace(TREE_DATA_PLACEHOLDER, &jsondata);
    fs::write(&report_path, html)?;
    info!("HTML report generated: {}", report_path.display());

    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tree() -> DomainTree {
        let mut tree = DomainTree::new();
        tree.insert("b.example.com");
        tree.insert("a.example.com");
        tree.insert("example.net");
        tree
    }

    #[test]
    fn serialization_is_deterministic_and_key_sorted() {
        let tree = sample_tree();
        let first = to_embedded_json(&tree).unwrap();
        let second = to_embedded_json(&tree).unwrap();
        assert_eq!(first, second);

        // "com" sorts before "net", "a." before "b."
        let com = first.find("\"com\"").unwrap();
        let net = first.find("\"net\"").unwrap();
        assert!(com < net);
        let a = first.find("\"a.example.com\"").unwrap();
        let b = first.find("\"b.example.com\"").unwrap();
        assert!(a < b);
    }

    #[test]
    fn empty_tree_serializes_to_an_empty_object() {
        assert_eq!(to_embedded_json(&DomainTree::new()).unwrap(), "{}");
    }

    #[test]
    fn serialization_escapes_script_sensitive_characters() {
        let mut tree = DomainTree::new();
        tree.insert("a<b>c&d.example.com");

        let json = to_embedded_json(&tree).unwrap();
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(!json.contains('&'));
        assert!(json.contains("a\\u003cb\\u003ec\\u0026d.example.com"));
    }

    #[test]
    fn render_report_writes_a_timestamped_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let report_path = render_report(&sample_tree(), temp.path()).unwrap();

        let file_name = report_path.file_name().unwrap().to_string_lossy();
        assert!(file_name.starts_with(REPORT_FILE_PREFIX));
        assert!(file_name.ends_with(".html"));

        let html = std::fs::read_to_string(&report_path).unwrap();
        assert!(html.contains("\"a.example.com\""));
        assert!(html.contains("jsmind"));
        assert!(!html.contains(TREE_DATA_PLACEHOLDER));
    }

    #[test]
    fn render_report_creates_a_missing_directory() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let nested = temp.path().join("reports").join("nested");

        let report_path = render_report(&sample_tree(), &nested).unwrap();
        assert!(report_path.exists());
        assert!(report_path.starts_with(&nested));
    }
}
