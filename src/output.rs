use crate::document::PageDocument;
use folio_types::RecordId;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name for a record's pages.
///
/// Record ids come from input data, so they are slugified rather than used
/// as paths. An id with nothing usable in it falls back to `record-<index>`.
pub fn output_dir_name(id: &RecordId, index: usize) -> String {
    let slug = slug::slugify(id.as_str());
    if slug.is_empty() {
        format!("record-{index}")
    } else {
        slug
    }
}

/// Hands out one distinct directory name per record of a run.
///
/// Different ids can slugify to the same name (`PO 7` and `po-7`); later
/// records get their input index appended instead of sharing a directory.
#[derive(Debug, Default)]
pub struct OutputNames {
    used: HashSet<String>,
}

impl OutputNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, id: &RecordId, index: usize) -> String {
        let base = output_dir_name(id, index);
        let mut name = base.clone();
        let mut attempt = 1;
        while self.used.contains(&name) {
            name = if attempt == 1 {
                format!("{base}-{index}")
            } else {
                format!("{base}-{index}-{attempt}")
            };
            attempt += 1;
        }
        if name != base {
            log::warn!("Record '{id}' shares output directory '{base}', using '{name}'");
        }
        self.used.insert(name.clone());
        name
    }
}

/// Writes `pages` to `<out>/<dir>/page-001.html`, ... and returns the
/// directory written to.
///
/// Page files left in the directory by an earlier run are removed first, so
/// the directory holds exactly this document. Other files are left alone.
pub fn write_pages(out: &Path, dir: &str, pages: &[PageDocument]) -> io::Result<PathBuf> {
    let target = out.join(dir);
    fs::create_dir_all(&target)?;
    remove_stale_pages(&target)?;
    for page in pages {
        fs::write(target.join(page.file_name()), page.markup())?;
    }
    log::info!("Wrote {} page(s) to {}", pages.len(), target.display());
    Ok(target)
}

fn remove_stale_pages(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_page = name
            .to_str()
            .is_some_and(|n| n.starts_with("page-") && n.ends_with(".html"));
        if is_page && entry.file_type()?.is_file() {
            log::debug!("Removing stale {}", entry.path().display());
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
