//! Core merge orchestration.
//!
//! [`Merger`] drives a merge run: it loads each input sequentially,
//! decides which pages of the file to keep, and assembles the selected
//! pages into a fresh document with a single page tree. Files are
//! processed strictly in input order, so the output page order is the
//! concatenation of each file's selected pages, ascending within the
//! file.
//!
//! Page selection per file follows a small state machine:
//! - No matching `--range` flag: every page is kept
//! - A matching flag that resolves to at least one page: exactly those
//!   pages are kept
//! - A matching flag that resolves to nothing: every page is kept and a
//!   warning is printed
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::config::Config;
//! use pdfzus::merge::Merger;
//! use pdfzus::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     output: PathBuf::from("merged.pdf"),
//!     ranges: vec!["a.pdf=1-3".to_string()],
//!     verbose: false,
//! };
//!
//! let merger = Merger::new();
//! let formatter = OutputFormatter::from_config(&config);
//! let result = merger.merge(&config, &formatter).await?;
//! println!("{} pages selected", result.outcome.total_pages);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object, ObjectId};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::{PdfzusError, Result};
use crate::io::PdfReader;
use crate::merge::ranges::{self, RangeEntry};
use crate::output::OutputFormatter;

/// Page dictionary keys that may be inherited from ancestor Pages nodes.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Summary of a completed merge.
#[derive(Debug, Clone, Serialize)]
pub struct MergeOutcome {
    /// Number of input files merged.
    pub files_merged: usize,
    /// Total number of pages in the merged document.
    pub total_pages: usize,
    /// Number of files whose range could not be interpreted and fell
    /// back to all pages.
    pub fallback_warnings: usize,
}

/// The merged document together with its summary.
pub struct MergeResult {
    /// The assembled document, ready to be written.
    pub document: Document,
    /// Summary of the merge.
    pub outcome: MergeOutcome,
}

/// How the pages of one input file are selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// No range flag matched the file; every page is kept.
    AllPages,
    /// A range resolved to these 0-based page indices, ascending.
    Explicit(Vec<usize>),
    /// A range matched but resolved to nothing; every page is kept.
    FallbackAll {
        /// The range string that could not be interpreted.
        raw_range: String,
    },
}

impl PageSelection {
    /// Decide the selection for one input file.
    ///
    /// Looks the file up in the parsed range entries and resolves the
    /// matched range against the file's page count. A matched range that
    /// yields no valid page becomes [`PageSelection::FallbackAll`].
    pub fn for_file(
        entries: &[RangeEntry],
        resolved_path: &str,
        raw_token: &str,
        total_pages: usize,
    ) -> Self {
        match ranges::find_range_for_file(entries, resolved_path, raw_token) {
            None => Self::AllPages,
            Some(range) => {
                let indices = ranges::resolve_page_range(range, total_pages);
                if indices.is_empty() {
                    Self::FallbackAll {
                        raw_range: range.to_string(),
                    }
                } else {
                    Self::Explicit(indices)
                }
            }
        }
    }

    /// Materialize the selected 0-based page indices, ascending.
    pub fn indices(&self, total_pages: usize) -> Vec<usize> {
        match self {
            Self::AllPages | Self::FallbackAll { .. } => (0..total_pages).collect(),
            Self::Explicit(indices) => indices.clone(),
        }
    }
}

/// Merges PDF documents according to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
        }
    }

    /// Merge the configured input files into a single document.
    ///
    /// Inputs are loaded and copied one at a time, in input order. The
    /// output document is assembled in memory; writing it is the
    /// caller's job.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated merge configuration
    /// * `formatter` - Sink for progress lines and warnings
    ///
    /// # Errors
    ///
    /// Fails before any file is opened if fewer than two inputs are
    /// configured or a `--range` flag is malformed. Fails during the
    /// run if an input is missing or unreadable. No partial output
    /// exists in any failure case.
    pub async fn merge(&self, config: &Config, formatter: &OutputFormatter) -> Result<MergeResult> {
        if config.inputs.len() < 2 {
            return Err(PdfzusError::NotEnoughInputs {
                count: config.inputs.len(),
            });
        }

        let entries = ranges::parse_range_specs(&config.ranges)?;

        let mut max_id = 1;
        let mut page_ids: Vec<ObjectId> = Vec::new();
        let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut fallback_warnings = 0;

        for input in &config.inputs {
            let loaded = self.reader.load(input).await?;
            let total_pages = loaded.page_count;

            let raw_token = input.to_string_lossy();
            let resolved = ranges::path_key(input);
            let selection = PageSelection::for_file(&entries, &resolved, &raw_token, total_pages);

            if let PageSelection::FallbackAll { raw_range } = &selection {
                formatter.warning(&format!(
                    "Could not interpret range \"{}\" for {}, using all pages",
                    raw_range,
                    input.display()
                ));
                fallback_warnings += 1;
            }

            let indices = selection.indices(total_pages);
            formatter.debug(&format!(
                "Adding: {} ({} pages, {} selected)",
                input.display(),
                total_pages,
                indices.len()
            ));

            let mut document = loaded.document;
            document.renumber_objects_with(max_id);
            max_id = document.max_id + 1;

            let document_pages = document.get_pages();
            for &index in &indices {
                let page_number = (index + 1) as u32;
                if let Some(&page_id) = document_pages.get(&page_number) {
                    flatten_page_inheritance(&mut document, page_id)?;
                    page_ids.push(page_id);
                }
            }

            objects.extend(document.objects);
        }

        let document = assemble_document(objects, max_id - 1, &page_ids)?;

        let outcome = MergeOutcome {
            files_merged: config.inputs.len(),
            total_pages: page_ids.len(),
            fallback_warnings,
        };

        Ok(MergeResult { document, outcome })
    }
}

/// Copy inheritable attributes from a page's ancestor chain onto the
/// page dictionary itself.
///
/// Pages may inherit Resources, MediaBox, CropBox and Rotate from their
/// Pages ancestors. The merged document re-parents every page to a new
/// page tree, so the values must live on the page before the old chain
/// is cut.
fn flatten_page_inheritance(document: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = document.get_dictionary(page_id).map_err(|e| {
        PdfzusError::merge_failed(format!("Page {page_id:?} is not a dictionary: {e}"))
    })?;

    let mut missing: Vec<&[u8]> = INHERITABLE_PAGE_KEYS
        .into_iter()
        .filter(|key| !page.has(key))
        .collect();
    let mut inherited: Vec<(Vec<u8>, Object)> = Vec::new();

    let mut parent = page
        .get(b"Parent")
        .ok()
        .and_then(|object| object.as_reference().ok());

    // Depth cap guards against cyclic Parent chains in damaged files.
    let mut depth = 0;
    while let Some(parent_id) = parent {
        if missing.is_empty() || depth >= 32 {
            break;
        }
        depth += 1;

        let dict = match document.get_dictionary(parent_id) {
            Ok(dict) => dict,
            Err(_) => break,
        };

        let mut still_missing = Vec::new();
        for key in missing {
            match dict.get(key) {
                Ok(value) => inherited.push((key.to_vec(), value.clone())),
                Err(_) => still_missing.push(key),
            }
        }
        missing = still_missing;

        parent = dict
            .get(b"Parent")
            .ok()
            .and_then(|object| object.as_reference().ok());
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = document.get_object_mut(page_id).map_err(|e| {
        PdfzusError::merge_failed(format!("Cannot update page {page_id:?}: {e}"))
    })?;
    if let Object::Dictionary(dict) = page {
        for (key, value) in inherited {
            dict.set(key, value);
        }
    }

    Ok(())
}

/// Build the output document around the selected pages.
///
/// All source objects are carried over, a fresh Pages node and Catalog
/// are created, every kept page is re-parented, and everything no longer
/// reachable from the new catalog is pruned away.
fn assemble_document(
    objects: BTreeMap<ObjectId, Object>,
    highest_id: u32,
    page_ids: &[ObjectId],
) -> Result<Document> {
    let mut document = Document::with_version("1.5");
    document.objects.extend(objects);
    document.max_id = highest_id;

    let pages_id = document.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let pages_dict = lopdf::dictionary! {
        "Type" => "Pages",
        "Count" => page_ids.len() as i64,
        "Kids" => kids,
    };
    document.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = document.new_object_id();
    let catalog_dict = lopdf::dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    document.objects.insert(catalog_id, Object::Dictionary(catalog_dict));
    document.trailer.set("Root", catalog_id);

    for &page_id in page_ids {
        let page = document.get_object_mut(page_id).map_err(|e| {
            PdfzusError::merge_failed(format!("Selected page {page_id:?} is missing: {e}"))
        })?;
        if let Object::Dictionary(dict) = page {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    document.prune_objects();
    document.renumber_objects();

    Ok(document)
}
