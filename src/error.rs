use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Packed record is {actual} bytes, expected {expected} (sum of its members)")]
    SizeMismatch { actual: usize, expected: usize },

    #[error("Field '{field}' sits at {actual:#x}, expected {expected:#x}")]
    Gap {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl LayoutError {
    pub fn gap(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::Gap {
            field,
            expected,
            actual,
        }
    }
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Layout check failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}
