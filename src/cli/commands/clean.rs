use crate::cli::parser::CleanCli;
use crate::config::Config;
use crate::core::{CleanLogic, Loader};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::fs_utils::confirm_overwrite;
use std::io;
use std::path::Path;

pub fn handle(cli: &CleanCli, cfg: &Config) -> AppResult<()> {
    let input = Path::new(&cli.input);
    let output = Path::new(&cli.output);
    let fill = cli.fill.as_deref().unwrap_or(&cfg.fill_text);

    // input errors surface before the overwrite prompt
    let table = Loader::load_table(input)?;
    info(format!(
        "Loaded {} rows from {}",
        table.rows.len(),
        input.display()
    ));

    confirm_overwrite(output, cli.force, &mut io::stdin().lock())?;

    let (cleaned, stats) = CleanLogic::clean(&table, fill);
    CleanLogic::write_table(&cleaned, output)?;

    success(format!(
        "Cleaned data written to {}: {} duplicate rows removed, {} empty cells filled ({} rows kept)",
        output.display(),
        stats.duplicates_removed,
        stats.cells_filled,
        cleaned.rows.len()
    ));

    Ok(())
}
