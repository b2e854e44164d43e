use clap::Parser;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Column, Image};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{error, info, warn};

mod cli;
mod commands;
mod config;
mod error;
mod export;
mod media;
mod state;
mod ui;

use config::Config;
use error::Error;
use state::data::LabelSummary;
use state::library::Library;
use ui::browse::TypeFilter;
use ui::form::{Field, LabelForm};
use ui::notify;

/// The image currently shown in the preview area
struct LoadedImage {
    path: PathBuf,
    /// Filename only, stored as the label's image name
    name: String,
    handle: Handle,
}

/// Main application state
struct LabelingApp {
    /// The labels database
    library: Library,
    config: Config,
    /// Text inputs of the metadata form
    form: LabelForm,
    image: Option<LoadedImage>,
    /// Browse table contents for the current filter
    rows: Vec<LabelSummary>,
    type_options: Vec<TypeFilter>,
    filter: TypeFilter,
    /// Status message to display to the user
    status: String,
}

/// What kind of file an export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Load Image"
    LoadImage,
    /// User clicked "Save to DB"
    SaveLabel,
    /// User clicked one of the export buttons
    Export(ExportFormat),
    FieldChanged(Field, String),
    FilterSelected(TypeFilter),
}

impl LabelingApp {
    fn new(library: Library, config: Config) -> (Self, Task<Message>) {
        let mut app = LabelingApp {
            library,
            config,
            form: LabelForm::default(),
            image: None,
            rows: Vec::new(),
            type_options: vec![TypeFilter::All],
            filter: TypeFilter::All,
            status: String::new(),
        };

        app.refresh();
        if app.status.is_empty() {
            let count = app.library.label_count().unwrap_or(0);
            info!("Labeling tool initialized with {} labels", count);
            app.status = format!("Ready. {} labels in {}.", count, app.library.path().display());
        }

        (app, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoadImage => self.load_image(),
            Message::SaveLabel => self.save_label(),
            Message::Export(format) => self.export(format),
            Message::FieldChanged(field, value) => self.form.set(field, value),
            Message::FilterSelected(filter) => {
                self.filter = filter;
                self.refresh();
            }
        }
        Task::none()
    }

    fn load_image(&mut self) {
        let Some(path) = FileDialog::new()
            .set_title("Select Product Image")
            .add_filter("Image files", &media::IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        match media::preview::load_preview(&path, self.config.thumbnail_size) {
            Ok(preview) => {
                info!("Loaded image {}", path.display());
                self.status = format!("Loaded {}", preview.file_name);
                self.image = Some(LoadedImage {
                    path,
                    name: preview.file_name,
                    handle: Handle::from_rgba(preview.width, preview.height, preview.rgba),
                });
            }
            Err(e) => {
                error!("Failed to load image {}: {}", path.display(), e);
                self.status = e.to_string();
                notify::error_text(
                    "File Error",
                    &format!("{e}. Ensure file format is supported."),
                );
            }
        }
    }

    fn save_label(&mut self) {
        let draft = match &self.image {
            Some(image) => self.form.to_draft(&image.name, &image.path.to_string_lossy()),
            None => {
                warn!("Save requested with no image loaded");
                notify::error_text("Input Error", "Please load an image first.");
                return;
            }
        };

        match commands::save_label(&self.library, &draft) {
            Ok(id) => {
                self.status = format!("Saved label {} for {}", id, draft.image_name);
                notify::info("Success", "Data saved to database.");
                self.form.clear();
                self.refresh();
            }
            Err(e) => self.fail(e),
        }
    }

    fn export(&mut self, format: ExportFormat) {
        match self.try_export(format) {
            Ok(Some((path, count))) => {
                self.status = format!("Exported {} labels to {}", count, path.display());
                let kind = format.extension().to_uppercase();
                notify::info("Success", &format!("Data exported to {kind}."));
            }
            // Dialog cancelled
            Ok(None) => {}
            Err(e) => self.fail(e),
        }
    }

    /// Read the table first, then ask where to write it
    fn try_export(&self, format: ExportFormat) -> error::Result<Option<(PathBuf, usize)>> {
        match format {
            ExportFormat::Csv => {
                let rows = self.library.export_rows()?;
                let Some(path) = self.pick_export_path(format) else {
                    return Ok(None);
                };
                export::write_csv(&path, &rows)?;
                Ok(Some((path, rows.len())))
            }
            ExportFormat::Json => {
                let labels = self.library.all_labels()?;
                let Some(path) = self.pick_export_path(format) else {
                    return Ok(None);
                };
                export::write_json(&path, &labels)?;
                Ok(Some((path, labels.len())))
            }
        }
    }

    fn pick_export_path(&self, format: ExportFormat) -> Option<PathBuf> {
        let extension = format.extension();
        let file_name = format!(
            "labels_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            extension
        );

        let mut dialog = FileDialog::new()
            .set_title("Export Labels")
            .set_file_name(file_name)
            .add_filter(extension.to_uppercase(), &[extension]);
        if let Some(dir) = &self.config.export_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    /// Re-query the browse table and the type filter options
    fn refresh(&mut self) {
        match commands::browse(&self.library, self.filter.as_filter()) {
            Ok(view) => {
                self.rows = view.rows;
                self.type_options = TypeFilter::options(&view.types);
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: Error) {
        error!("{}: {}", err.title(), err);
        self.status = format!("{}: {}", err.title(), err);
        notify::error(&err);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let preview_size = self.config.thumbnail_size as f32;
        let preview: Element<Message> = match &self.image {
            Some(image) => Image::new(image.handle.clone()).into(),
            None => text("No image loaded").size(16).into(),
        };

        let buttons = row![
            button("Load Image").on_press(Message::LoadImage).padding(10),
            button("Save to DB").on_press(Message::SaveLabel).padding(10),
            button("Export CSV")
                .on_press(Message::Export(ExportFormat::Csv))
                .padding(10),
            button("Export JSON")
                .on_press(Message::Export(ExportFormat::Json))
                .padding(10),
        ]
        .spacing(10);

        let editor: Column<Message> = column![
            container(preview)
                .width(Length::Fill)
                .height(Length::Fixed(preview_size))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(preview_size)),
            container(buttons).center_x(Length::Fill),
            self.form.view(),
        ]
        .spacing(10)
        .width(Length::Fixed(620.0));

        let content: Column<Message> = column![
            row![
                editor,
                ui::browse::view(&self.rows, &self.type_options, &self.filter),
            ]
            .spacing(20)
            .height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(10)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn run_gui(library: Library, config: Config) -> iced::Result {
    iced::application(
        "Product Image Labeling Tool",
        LabelingApp::update,
        LabelingApp::view,
    )
    .theme(LabelingApp::theme)
    .window_size((1400.0, 900.0))
    .centered()
    .run_with(move || LabelingApp::new(library, config))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = cli::Cli::parse();
    info!("Starting product-labels v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(cli.config.as_deref())?.with_database(cli.database.clone());
    let library = Library::open(&config.database_path)?;

    match cli.command {
        Some(command) => cli::run(command, &library),
        None => run_gui(library, config).map_err(|e| anyhow::anyhow!("{e}")),
    }
}
