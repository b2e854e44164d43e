/// Browse panel: type filter and summary table
use iced::widget::{column, pick_list, row, scrollable, text, Column, Row};
use iced::{Element, Length};
use std::fmt;

use crate::state::data::LabelSummary;
use crate::Message;

const COLUMN_TITLES: [&str; 5] = [
    "Image Name",
    "Product Name",
    "Manufacturer Company",
    "Mfg Date",
    "Type",
];

/// Entry of the type pick list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Filter value for the store, `None` meaning every row
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Only(label_type) => Some(label_type.as_str()),
        }
    }

    /// Pick list entries: "All types" followed by each known type
    pub fn options(types: &[String]) -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(types.iter().cloned().map(TypeFilter::Only))
            .collect()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "All types"),
            TypeFilter::Only(label_type) => write!(f, "{label_type}"),
        }
    }
}

fn cell(value: &str) -> Element<'_, Message> {
    text(value).width(Length::FillPortion(1)).into()
}

fn summary_row(summary: &LabelSummary) -> Element<'_, Message> {
    row![
        cell(&summary.image_name),
        cell(&summary.product_name),
        cell(&summary.manufacturer_company),
        cell(&summary.manufacturing_date),
        cell(&summary.label_type),
    ]
    .spacing(8)
    .into()
}

/// Filter control above a scrollable table of summaries
pub fn view<'a>(
    rows: &'a [LabelSummary],
    options: &'a [TypeFilter],
    selected: &'a TypeFilter,
) -> Element<'a, Message> {
    let filter = row![
        text("Displayed Data (by Type):"),
        pick_list(options, Some(selected), Message::FilterSelected),
    ]
    .spacing(10);

    let header: Row<Message> = Row::with_children(
        COLUMN_TITLES
            .into_iter()
            .map(|title| text(title).size(14).width(Length::FillPortion(1)).into()),
    )
    .spacing(8);

    let body: Column<Message> = Column::with_children(rows.iter().map(summary_row)).spacing(4);

    column![
        filter,
        header,
        scrollable(body).height(Length::Fill),
        text(format!("{} labels shown", rows.len())).size(12),
    ]
    .spacing(8)
    .padding(10)
    .into()
}
