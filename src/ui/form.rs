/// The metadata form: ten labelled text inputs
use iced::widget::{column, row, text, text_input, Column};
use iced::{Element, Length};

use crate::state::data::LabelDraft;
use crate::Message;

/// Form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductName,
    ManufacturerCompany,
    ManufacturerAddress,
    ManufacturerPhone,
    ImporterCompany,
    ImporterAddress,
    ImporterPhone,
    ManufacturingDate,
    ExpiryDate,
    Type,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::ProductName,
        Field::ManufacturerCompany,
        Field::ManufacturerAddress,
        Field::ManufacturerPhone,
        Field::ImporterCompany,
        Field::ImporterAddress,
        Field::ImporterPhone,
        Field::ManufacturingDate,
        Field::ExpiryDate,
        Field::Type,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::ProductName => "Product Name:",
            Field::ManufacturerCompany => "Manufacturer Company:",
            Field::ManufacturerAddress => "Manufacturer Address:",
            Field::ManufacturerPhone => "Manufacturer Phone:",
            Field::ImporterCompany => "Importer Company:",
            Field::ImporterAddress => "Importer Address:",
            Field::ImporterPhone => "Importer Phone:",
            Field::ManufacturingDate => "Manufacturing Date (YYYY-MM-DD):",
            Field::ExpiryDate => "Expiry Date (YYYY-MM-DD):",
            Field::Type => "Type:",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Current contents of the text inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelForm {
    values: [String; 10],
}

impl LabelForm {
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    /// Empty every input (the loaded image is kept by the caller)
    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    /// Build a draft for the given image, trimming every input
    pub fn to_draft(&self, image_name: &str, image_path: &str) -> LabelDraft {
        let get = |field: Field| self.value(field).trim().to_string();
        LabelDraft {
            image_name: image_name.to_string(),
            image_path: image_path.to_string(),
            product_name: get(Field::ProductName),
            manufacturer_company: get(Field::ManufacturerCompany),
            manufacturer_address: get(Field::ManufacturerAddress),
            manufacturer_phone: get(Field::ManufacturerPhone),
            importer_company: get(Field::ImporterCompany),
            importer_address: get(Field::ImporterAddress),
            importer_phone: get(Field::ImporterPhone),
            manufacturing_date: get(Field::ManufacturingDate),
            expiry_date: get(Field::ExpiryDate),
            label_type: get(Field::Type),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let inputs: Column<Message> = Column::with_children(Field::ALL.into_iter().map(|field| {
            row![
                text(field.label()).width(Length::Fixed(230.0)),
                text_input("", self.value(field))
                    .on_input(move |value| Message::FieldChanged(field, value))
                    .width(Length::Fixed(340.0)),
            ]
            .spacing(10)
            .into()
        }))
        .spacing(6);

        column![inputs].padding(5).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_inputs() {
        let mut form = LabelForm::default();
        form.set(Field::ProductName, "  Green tea ".to_string());
        form.set(Field::ManufacturingDate, "2024-01-15\n".to_string());
        form.set(Field::Type, "\tdrink".to_string());

        let draft = form.to_draft("tea.png", "/photos/tea.png");

        assert_eq!(draft.image_name, "tea.png");
        assert_eq!(draft.image_path, "/photos/tea.png");
        assert_eq!(draft.product_name, "Green tea");
        assert_eq!(draft.manufacturing_date, "2024-01-15");
        assert_eq!(draft.label_type, "drink");
        assert_eq!(draft.importer_phone, "");
    }

    #[test]
    fn test_fields_map_to_their_own_slot() {
        let mut form = LabelForm::default();
        for (i, field) in Field::ALL.into_iter().enumerate() {
            form.set(field, format!("v{i}"));
        }

        let draft = form.to_draft("", "");

        assert_eq!(draft.product_name, "v0");
        assert_eq!(draft.manufacturer_phone, "v3");
        assert_eq!(draft.importer_company, "v4");
        assert_eq!(draft.expiry_date, "v8");
        assert_eq!(draft.label_type, "v9");
    }

    #[test]
    fn test_clear() {
        let mut form = LabelForm::default();
        form.set(Field::ImporterAddress, "Somewhere".to_string());
        form.clear();
        assert_eq!(form, LabelForm::default());
    }
}
