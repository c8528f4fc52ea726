use super::Document;
use crate::error::{GridcalcError, Result};
use crate::storage::{apply_records, read_records, write_file, write_markdown};
use gridcalc_engine::engine::{Grid, recalculate};
use log::debug;
use std::path::{Path, PathBuf};

impl Document {
    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save_file(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            return Err(GridcalcError::NoFilePath);
        };
        self.write_to(&path)?;
        Ok(path)
    }

    /// Save to `path` and make it the current file path.
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        write_file(path, &self.grid, self.config.separator)?;
        self.grid.mark_clean();
        debug!("saved {}", path.display());
        Ok(())
    }

    /// Load from file, replacing the whole grid.
    ///
    /// The file is read and parsed before anything is touched, so a failed
    /// load leaves the document as it was.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let records = read_records(path, self.config.separator)?;

        let mut grid = Grid::new(self.config.rows, self.config.cols);
        let count = apply_records(&mut grid, &records);
        recalculate(&mut grid);
        grid.mark_clean();
        debug!("loaded {} cells from {}", count, path.display());

        self.grid = grid;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Export display values as a Markdown table.
    pub fn export_markdown(&self, path: &Path) -> Result<()> {
        write_markdown(path, self)?;
        Ok(())
    }
}
