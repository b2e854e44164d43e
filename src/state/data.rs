/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer, the exporters and the UI layer.
use serde::{Deserialize, Serialize};

/// Company block used for both the manufacturer and the importer
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Party {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// A label as entered in the form, before it is stored
///
/// Every field is plain text and may be empty; `validate` decides
/// whether the draft is acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDraft {
    /// Filename only (e.g., "IMG_0001.jpg")
    pub image_name: String,
    /// Full path to the image file
    pub image_path: String,
    pub product_name: String,
    pub manufacturer_company: String,
    pub manufacturer_address: String,
    pub manufacturer_phone: String,
    pub importer_company: String,
    pub importer_address: String,
    pub importer_phone: String,
    /// Expected as YYYY-MM-DD when present
    pub manufacturing_date: String,
    /// Expected as YYYY-MM-DD when present
    pub expiry_date: String,
    /// Free-text category used by the browse filter
    pub label_type: String,
}

/// A full row of the labels table
///
/// Rows written by other tools may leave any descriptive column NULL,
/// so those are optional here. This is also the JSON export shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredLabel {
    /// Database ID (not part of the JSON document)
    #[serde(skip)]
    pub id: i64,
    pub image_name: String,
    pub image_path: String,
    pub image_base64: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer: Party,
    pub importer: Party,
    pub manufacturing_date: Option<String>,
    pub expiry_date: Option<String>,
    #[serde(rename = "type")]
    pub label_type: Option<String>,
}

/// The five columns shown in the browse list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSummary {
    pub image_name: String,
    pub product_name: String,
    pub manufacturer_company: String,
    pub manufacturing_date: String,
    pub label_type: String,
}

/// The CSV projection of a row; no payload and no addresses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    pub id: i64,
    pub image_name: String,
    pub product_name: String,
    pub manufacturer_company: String,
    pub manufacturer_phone: String,
    pub importer_company: String,
    pub importer_phone: String,
    pub manufacturing_date: String,
    pub expiry_date: String,
    pub label_type: String,
}

impl ExportRow {
    /// Cells in `EXPORT_COLUMNS` order
    pub fn to_record(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.image_name.clone(),
            self.product_name.clone(),
            self.manufacturer_company.clone(),
            self.manufacturer_phone.clone(),
            self.importer_company.clone(),
            self.importer_phone.clone(),
            self.manufacturing_date.clone(),
            self.expiry_date.clone(),
            self.label_type.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_label_json_shape() {
        let label = StoredLabel {
            id: 7,
            image_name: "a.png".to_string(),
            image_path: "/tmp/a.png".to_string(),
            image_base64: Some("AAEC".to_string()),
            product_name: Some("Tea".to_string()),
            manufacturer: Party {
                company_name: Some("Acme".to_string()),
                address: None,
                phone: Some("+84 123".to_string()),
            },
            importer: Party::default(),
            manufacturing_date: Some("2024-01-15".to_string()),
            expiry_date: None,
            label_type: Some("food".to_string()),
        };

        let value = serde_json::to_value(&label).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["type"], "food");
        assert_eq!(value["manufacturer"]["company_name"], "Acme");
        assert!(value["manufacturer"]["address"].is_null());
        assert!(value["importer"].is_object());
        assert_eq!(value["image_base64"], "AAEC");
    }

    #[test]
    fn test_export_row_record_order() {
        let row = ExportRow {
            id: 3,
            image_name: "x.jpg".to_string(),
            label_type: "drink".to_string(),
            ..Default::default()
        };
        let record = row.to_record();
        assert_eq!(record[0], "3");
        assert_eq!(record[1], "x.jpg");
        assert_eq!(record[9], "drink");
    }
}
