//! CSV serialization in the layout Asana's importer expects
//!
//! Asana's own exports quote every field and start with a UTF-8 byte order
//! mark so Excel opens them with the right encoding; the importer accepts the
//! same layout.

use super::language::Language;
use super::row::AsanaRow;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a header row and all rows as an Asana CSV document
///
/// # Arguments
/// * `out` - Destination (file, buffer, ...)
/// * `rows` - Rows in import order; subtasks must follow their parent
/// * `language` - Selects the localized header
pub fn write_rows<W: Write>(mut out: W, rows: &[AsanaRow], language: Language) -> Result<()> {
    out.write_all(UTF8_BOM).context("Failed to write byte order mark")?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    writer
        .write_record(language.headers())
        .context("Failed to write CSV header")?;
    for row in rows {
        writer
            .write_record(row.to_record())
            .with_context(|| format!("Failed to write CSV row for '{}'", row.name))?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Render rows to an in-memory CSV string (BOM included)
pub fn render_csv(rows: &[AsanaRow], language: Language) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, rows, language)?;
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}
