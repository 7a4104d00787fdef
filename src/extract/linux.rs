use anyhow::{bail, Result};
use scraper::ElementRef;

use super::{body_rows, row_cells, uefi_supported};
use crate::model::OsRecord;

// "no remark" placeholder used by the Linux table
const NO_REMARK: &str = "None";

/// Values a row may omit; omitted cells mean "same as the row above".
#[derive(Default)]
struct Carry {
    distro: String,
    remarks: String,
}

/// Extract the Linux table as a fold over rows. A full row carries 5 cells
/// (distro, os_name, bits, uefi, remarks); a 4-cell row inherits the distro,
/// a 3-cell row inherits distro and remarks.
pub fn extract(table: ElementRef) -> Result<Vec<OsRecord>> {
    let mut records = Vec::new();
    let mut carry = Carry::default();

    for (idx, row) in body_rows(table).into_iter().enumerate() {
        let cells = row_cells(row);
        let (os_name, bits, uefi) = match cells.as_slice() {
            [distro, os_name, bits, uefi, remarks] => {
                carry.distro = distro.clone();
                carry.remarks = remarks.clone();
                (os_name, bits, uefi)
            }
            [os_name, bits, uefi, remarks] => {
                carry.remarks = remarks.clone();
                (os_name, bits, uefi)
            }
            [os_name, bits, uefi] => (os_name, bits, uefi),
            other => bail!("Row {}: expected 3 to 5 cells, found {}", idx, other.len()),
        };

        let remarks = if carry.remarks == NO_REMARK {
            String::new()
        } else {
            carry.remarks.clone()
        };

        records.push(OsRecord {
            distro: carry.distro.clone(),
            os_name: os_name.clone(),
            bits: bits.clone(),
            uefi_support: uefi_supported(uefi),
            remarks,
        });
    }

    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::TABLE;
    use scraper::Html;

    fn extract_rows(rows: &str) -> Result<Vec<OsRecord>> {
        let html = format!("<table><tbody>{}</tbody></table>", rows);
        let doc = Html::parse_document(&html);
        let table = doc.select(&TABLE).next().unwrap();
        extract(table)
    }

    fn row(cells: &[&str]) -> String {
        let tds: String = cells
            .iter()
            .map(|c| format!("<td><p>{}</p></td>", c))
            .collect();
        format!("<tr>{}</tr>", tds)
    }

    #[test]
    fn five_cell_row_maps_positionally() {
        let records =
            extract_rows(&row(&["CentOS", "CentOS 7.0", "64", "No", "GPU not supported"]))
                .unwrap();
        let r = &records[0];
        assert_eq!(r.distro, "CentOS");
        assert_eq!(r.os_name, "CentOS 7.0");
        assert_eq!(r.bits, "64");
        assert!(!r.uefi_support);
        assert_eq!(r.remarks, "GPU not supported");
    }

    #[test]
    fn four_cell_row_inherits_distro() {
        let rows = format!(
            "{}{}",
            row(&["Ubuntu", "Ubuntu 18.04", "64", "Yes", "None"]),
            row(&["Ubuntu 20.04", "64", "Yes", "None"]),
        );
        let records = extract_rows(&rows).unwrap();
        assert_eq!(records[1].distro, "Ubuntu");
        assert_eq!(records[1].os_name, "Ubuntu 20.04");
    }

    #[test]
    fn three_cell_row_inherits_distro_and_remarks() {
        let rows = format!(
            "{}{}",
            row(&["SUSE", "SUSE 12 SP1", "64", "Yes", "Btrfs not supported"]),
            row(&["SUSE 12 SP2", "64", "Yes"]),
        );
        let records = extract_rows(&rows).unwrap();
        assert_eq!(records[1].distro, "SUSE");
        assert_eq!(records[1].remarks, "Btrfs not supported");
    }

    #[test]
    fn none_sentinel_normalizes_to_empty() {
        let rows = format!(
            "{}{}",
            row(&["CentOS", "CentOS 7.0", "64", "No", "GPU not supported"]),
            row(&["CentOS 7.1", "64", "Yes", "None"]),
        );
        let records = extract_rows(&rows).unwrap();
        assert_eq!(records[0].remarks, "GPU not supported");
        assert_eq!(records[1].remarks, "");
    }

    #[test]
    fn three_cell_row_after_none_sentinel_stays_empty() {
        let rows = format!(
            "{}{}{}",
            row(&["CentOS", "CentOS 7.0", "64", "No", "None"]),
            row(&["CentOS 7.1", "64", "Yes", "None"]),
            row(&["CentOS 7.2", "64", "Yes"]),
        );
        let records = extract_rows(&rows).unwrap();
        assert_eq!(records[2].distro, "CentOS");
        assert_eq!(records[2].remarks, "");
    }

    #[test]
    fn leading_partial_row_gets_empty_distro() {
        // Degenerate table: no row ever supplies a distro
        let records = extract_rows(&row(&["Mystery 1.0", "64", "Yes"])).unwrap();
        assert_eq!(records[0].distro, "");
    }

    #[test]
    fn unexpected_cell_count_is_fatal() {
        let err = extract_rows(&row(&["a", "b"])).unwrap_err();
        assert!(err.to_string().contains("found 2"));

        let err = extract_rows(&row(&["a", "b", "c", "d", "e", "f"])).unwrap_err();
        assert!(err.to_string().contains("found 6"));
    }
}
