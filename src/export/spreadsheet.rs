/// Compact CSV export for spreadsheets
///
/// Only the short columns are written: the image payload and the addresses
/// would make rows unreadable in a spreadsheet.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::state::data::ExportRow;

/// Header row, in output order
pub const EXPORT_COLUMNS: [&str; 10] = [
    "id",
    "image_name",
    "product_name",
    "manufacturer_company",
    "manufacturer_phone",
    "importer_company",
    "importer_phone",
    "manufacturing_date",
    "expiry_date",
    "type",
];

/// UTF-8 byte order mark so spreadsheet apps detect the encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the header and one line per row to `path`
pub fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;

    tracing::info!("Exported {} rows to CSV: {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str) -> ExportRow {
        ExportRow {
            id,
            image_name: name.to_string(),
            product_name: "Cà phê sữa".to_string(),
            manufacturer_company: "Acme, Ltd".to_string(),
            manufacturer_phone: "+84 28 3822".to_string(),
            label_type: "drink".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bom_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.csv");

        write_csv(&path, &[row(1, "a.png"), row(2, "b.png")]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let content = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "id,image_name,product_name,manufacturer_company,manufacturer_phone,importer_company,importer_phone,manufacturing_date,expiry_date,type"
        );
        assert_eq!(lines[1], "1,a.png,Cà phê sữa,\"Acme, Ltd\",+84 28 3822,,,,,drink");
        assert!(lines[2].starts_with("2,b.png,"));
        assert_eq!(lines.len(), 3);
        assert!(content.contains("\r\n"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_start_matches('\u{feff}').lines().count(), 1);
    }

    #[test]
    fn test_unwritable_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("labels.csv");
        assert!(write_csv(&path, &[row(1, "a.png")]).is_err());
    }
}
