use anyhow::{bail, Result};
use scraper::ElementRef;

use super::{body_rows, row_cells, uefi_supported};
use crate::model::OsRecord;

// "no remark" placeholder used by the Windows table
const NO_REMARK: &str = "N/A";

/// Extract the Windows table. Rows carry 3 or 4 cells; the remarks column is
/// optional and a row without one has no remark.
pub fn extract(table: ElementRef) -> Result<Vec<OsRecord>> {
    let mut records = Vec::new();

    for (idx, row) in body_rows(table).into_iter().enumerate() {
        let cells = row_cells(row);
        let (os_name, bits, uefi, remarks) = match cells.as_slice() {
            [os_name, bits, uefi] => (os_name, bits, uefi, String::new()),
            [os_name, bits, uefi, remarks] => {
                let remarks = if remarks == NO_REMARK {
                    String::new()
                } else {
                    remarks.clone()
                };
                (os_name, bits, uefi, remarks)
            }
            other => bail!("Row {}: expected 3 or 4 cells, found {}", idx, other.len()),
        };

        records.push(OsRecord {
            distro: "Windows".to_string(),
            os_name: os_name.clone(),
            bits: bits.clone(),
            uefi_support: uefi_supported(uefi),
            remarks,
        });
    }

    Ok(records)
}

// ── Tests ──
