// file: src/utils/validation.rs
// description: input path validation helpers
// reference: input validation patterns

use crate::error::{Result, ScanError};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ScanError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ScanError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Report outputs must not land on top of each other or an input.
    pub fn validate_distinct_outputs(paths: &[&Path]) -> Result<()> {
        for (i, first) in paths.iter().enumerate() {
            if paths[i + 1..].iter().any(|other| other == first) {
                return Err(ScanError::Validation(format!(
                    "Path used more than once: {}",
                    first.display()
                )));
            }
        }

        Ok(())
    }
}
