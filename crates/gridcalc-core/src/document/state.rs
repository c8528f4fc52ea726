use crate::config::SheetConfig;
use crate::error::Result;
use gridcalc_engine::engine::Grid;
use log::debug;
use std::path::PathBuf;

/// UI-agnostic document state for the spreadsheet.
pub struct Document {
    /// The spreadsheet grid, sized from `config` at construction
    pub grid: Grid,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Dimensions, display width and file separator
    pub config: SheetConfig,
}

impl Document {
    /// Create a new document state.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new(config: SheetConfig) -> Self {
        Document {
            grid: Grid::new(config.rows, config.cols),
            file_path: None,
            config,
        }
    }

    /// Create a new document and load a file if provided.
    ///
    /// A path that does not exist yet binds the document to it without
    /// loading anything, so a later save creates it.
    pub fn with_file(path: Option<PathBuf>, config: SheetConfig) -> Result<Self> {
        config.validate()?;
        let mut doc = Self::new(config);

        if let Some(p) = &path
            && p.exists()
        {
            doc.load_file(p)?;
        } else if let Some(p) = path {
            debug!("{} does not exist, starting empty", p.display());
            doc.file_path = Some(p);
        }
        Ok(doc)
    }

    /// Whether there are edits not yet written to disk.
    pub fn is_modified(&self) -> bool {
        self.grid.is_dirty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}
