use crate::domain::{AppError, Selection, ValidationReport, validate};

/// Execute the validate command: structural checks, canonical sync, advisories.
pub fn execute(selection: &Selection) -> Result<ValidationReport, AppError> {
    selection.check()?;
    Ok(validate(&selection.clone().synchronized()))
}
