/// Full JSON export, including the image payloads
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::state::data::StoredLabel;

/// Write every label as an indented JSON array to `path`.
/// Non-ASCII text is written as-is, not escaped.
pub fn write_json(path: &Path, labels: &[StoredLabel]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    labels.serialize(&mut serializer)?;
    out.flush()?;

    tracing::info!("Exported {} labels to JSON: {}", labels.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Party;

    fn label() -> StoredLabel {
        StoredLabel {
            id: 1,
            image_name: "trà.png".to_string(),
            image_path: "/photos/trà.png".to_string(),
            image_base64: Some("iVBORw0KGgo=".to_string()),
            product_name: Some("Trà xanh".to_string()),
            manufacturer: Party {
                company_name: Some("Acme".to_string()),
                address: Some("1 Lê Lợi".to_string()),
                phone: Some("+84 28".to_string()),
            },
            importer: Party {
                company_name: Some("Import Co".to_string()),
                address: None,
                phone: None,
            },
            manufacturing_date: Some("2024-01-15".to_string()),
            expiry_date: Some("2025-01-15".to_string()),
            label_type: Some("drink".to_string()),
        }
    }

    #[test]
    fn test_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");

        write_json(&path, &[label()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Trà xanh"));
        assert!(content.contains("\n    {"));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let entry = &value[0];
        assert_eq!(entry["image_base64"], "iVBORw0KGgo=");
        assert_eq!(entry["manufacturer"]["address"], "1 Lê Lợi");
        assert_eq!(entry["importer"]["company_name"], "Import Co");
        assert!(entry["importer"]["phone"].is_null());
        assert_eq!(entry["type"], "drink");
        assert!(entry.get("id").is_none());
    }

    #[test]
    fn test_empty_table_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_json(&path, &[]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
