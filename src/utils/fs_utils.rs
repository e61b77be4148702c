use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decide whether `csvclean` may replace `output`.
///
/// A missing file or `--force` needs no question; otherwise the answer is read
/// from `answers` and only `y`/`yes` (any case) allow the overwrite.
pub fn confirm_overwrite<R: BufRead>(
    output: &Path,
    force: bool,
    answers: &mut R,
) -> AppResult<()> {
    if force || !output.exists() {
        return Ok(());
    }

    warning(format!(
        "Output file '{}' already exists (use --force to skip this question).",
        output.display()
    ));
    print!("Replace it with the cleaned table? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Cancelled(format!(
            "Cleaning cancelled: '{}' left untouched",
            output.display()
        ))),
    }
}
