pub mod linux;
pub mod windows;

use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use scraper::{ElementRef, Html, Selector};

use crate::model::OsRecord;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static BODY_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static PARA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Decode the FAQ page into records: first table is Windows, second is Linux.
/// Windows records precede Linux records, rows in document order.
pub fn extract_records(html: &str) -> Result<Vec<OsRecord>> {
    let doc = Html::parse_document(html);
    let tables: Vec<ElementRef> = doc.select(&TABLE).collect();
    if tables.len() < 2 {
        bail!(
            "Expected 2 compatibility tables (Windows, Linux), found {}",
            tables.len()
        );
    }

    let mut records = windows::extract(tables[0]).context("Windows table")?;
    records.extend(linux::extract(tables[1]).context("Linux table")?);
    Ok(records)
}

pub(crate) fn body_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table.select(&BODY_ROW).collect()
}

/// One text value per `<td>`: the first `<p>` descendant's text, trimmed.
/// Cells without a `<p>` wrapper fall back to their own text content.
pub(crate) fn row_cells(row: ElementRef) -> Vec<String> {
    row.select(&CELL)
        .map(|cell| {
            let text: String = match cell.select(&PARA).next() {
                Some(para) => para.text().collect(),
                None => cell.text().collect(),
            };
            text.trim().to_string()
        })
        .collect()
}

pub(crate) fn uefi_supported(text: &str) -> bool {
    text.eq_ignore_ascii_case("yes")
}

// ── Tests ──
