//! Recursive discovery of capability documents.

use crate::schema::Document;
use xiaoma_content::standalone;
use xiaoma_fs::{NormalizedPath, io};

/// Recursively collect documents under `root` whose extension is in
/// `extensions` (case-insensitive, without the dot).
///
/// A missing root yields an empty list. Unreadable directories and files are
/// skipped with a warning. Results are sorted by path.
pub fn scan(root: &NormalizedPath, extensions: &[&str]) -> Vec<Document> {
    let mut documents = Vec::new();
    if !root.is_dir() {
        tracing::debug!("Scan root {} absent, nothing to collect", root);
        return documents;
    }
    walk(root, extensions, &mut documents);
    documents.sort_by(|a, b| a.path.cmp(&b.path));
    documents
}

/// Like [`scan`], additionally probing each document for its standalone
/// marker. Probe failures degrade to `standalone = false`.
pub fn scan_with_standalone_probe(root: &NormalizedPath, extensions: &[&str]) -> Vec<Document> {
    scan(root, extensions)
        .into_iter()
        .map(|mut doc| {
            doc.standalone = standalone::probe(&doc.raw, &doc.extension);
            doc
        })
        .collect()
}

fn walk(dir: &NormalizedPath, extensions: &[&str], out: &mut Vec<Document>) {
    let entries = match io::list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Skipping unreadable directory {}: {}", dir, e);
            return;
        }
    };

    for entry in entries {
        if entry.is_dir() {
            walk(&entry, extensions, out);
            continue;
        }
        let Some(extension) = entry.extension().map(str::to_ascii_lowercase) else {
            continue;
        };
        if !extensions.iter().any(|e| e.eq_ignore_ascii_case(&extension)) {
            continue;
        }
        match io::read_text(&entry) {
            Ok(raw) => out.push(Document {
                path: entry,
                extension,
                raw,
                standalone: false,
            }),
            Err(e) => tracing::warn!("Skipping unreadable file {}: {}", entry, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xiaoma_test_utils::{SourceTree, docs};

    fn names(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.file_name()).collect()
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tree = SourceTree::new();
        let root = NormalizedPath::new(tree.source_root().join("nope"));
        assert!(scan(&root, &["md"]).is_empty());
    }

    #[test]
    fn test_recursive_and_filtered() {
        let tree = SourceTree::new();
        tree.agent("core", "pm.md", "a")
            .agent("core", "nested/dev.MD", "b")
            .agent("core", "notes.txt", "c");

        let root = NormalizedPath::new(tree.source_module("core").join("agents"));
        let found = scan(&root, &["md"]);
        assert_eq!(names(&found), vec!["dev.MD", "pm.md"]);
        assert!(found.iter().all(|d| d.extension == "md"));
        assert!(found.iter().all(|d| !d.standalone));
    }

    #[test]
    fn test_standalone_probe() {
        let tree = SourceTree::new();
        tree.task("core", "review.xml", &docs::xml_task("review", true))
            .task("core", "index.xml", &docs::xml_task("index", false))
            .task("core", "shard.md", &docs::markdown_tool("shard", "Split docs", true))
            .task("core", "quoted.md", "---\nstandalone: \"true\"\n---\n");

        let root = NormalizedPath::new(tree.source_module("core").join("tasks"));
        let found = scan_with_standalone_probe(&root, &["xml", "md"]);
        let flags: Vec<(&str, bool)> = found.iter().map(|d| (d.stem(), d.standalone)).collect();
        assert_eq!(
            flags,
            vec![
                ("index", false),
                ("quoted", false),
                ("review", true),
                ("shard", true)
            ]
        );
    }
}
