//! Command line front end
//!
//! Without a subcommand the window opens; the subcommands run the same
//! actions headless, for scripting and batch exports.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::state::data::LabelDraft;
use crate::state::library::Library;

#[derive(Parser, Debug)]
#[command(name = "product-labels", version, about = "Label product images with manufacturer and importer details")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(long, env = "PRODUCT_LABELS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database file, overriding the config
    #[arg(long, env = "PRODUCT_LABELS_DATABASE")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Save a label for an image file
    Add(AddArgs),
    /// Print saved labels (image, product, manufacturer, mfg date, type)
    List {
        /// Only labels of exactly this type
        #[arg(long = "type")]
        label_type: Option<String>,
    },
    /// Print every type in use
    Types,
    /// Export the compact CSV
    ExportCsv { path: PathBuf },
    /// Export every column, image payloads included, as JSON
    ExportJson { path: PathBuf },
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    /// Image file to attach
    #[arg(long)]
    pub image: PathBuf,
    #[arg(long, default_value = "")]
    pub product_name: String,
    #[arg(long, default_value = "")]
    pub manufacturer_company: String,
    #[arg(long, default_value = "")]
    pub manufacturer_address: String,
    #[arg(long, default_value = "")]
    pub manufacturer_phone: String,
    #[arg(long, default_value = "")]
    pub importer_company: String,
    #[arg(long, default_value = "")]
    pub importer_address: String,
    #[arg(long, default_value = "")]
    pub importer_phone: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub manufacturing_date: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub expiry_date: String,
    #[arg(long = "type", default_value = "")]
    pub label_type: String,
}

impl AddArgs {
    pub fn to_draft(&self) -> LabelDraft {
        let image_name = self
            .image
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        LabelDraft {
            image_name,
            image_path: self.image.to_string_lossy().to_string(),
            product_name: self.product_name.trim().to_string(),
            manufacturer_company: self.manufacturer_company.trim().to_string(),
            manufacturer_address: self.manufacturer_address.trim().to_string(),
            manufacturer_phone: self.manufacturer_phone.trim().to_string(),
            importer_company: self.importer_company.trim().to_string(),
            importer_address: self.importer_address.trim().to_string(),
            importer_phone: self.importer_phone.trim().to_string(),
            manufacturing_date: self.manufacturing_date.trim().to_string(),
            expiry_date: self.expiry_date.trim().to_string(),
            label_type: self.label_type.trim().to_string(),
        }
    }
}

/// Run one headless command against the library
pub fn run(command: Command, library: &Library) -> Result<()> {
    match command {
        Command::Add(args) => {
            let id = commands::save_label(library, &args.to_draft())?;
            println!("Saved label {id}");
        }
        Command::List { label_type } => {
            let view = commands::browse(library, label_type.as_deref())?;
            for row in &view.rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    row.image_name,
                    row.product_name,
                    row.manufacturer_company,
                    row.manufacturing_date,
                    row.label_type
                );
            }
        }
        Command::Types => {
            for label_type in library.distinct_types()? {
                println!("{label_type}");
            }
        }
        Command::ExportCsv { path } => {
            let count = commands::export_csv(library, &path)?;
            println!("Exported {count} rows to {}", path.display());
        }
        Command::ExportJson { path } => {
            let count = commands::export_json(library, &path)?;
            println!("Exported {count} labels to {}", path.display());
        }
    }
    Ok(())
}
