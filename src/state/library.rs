use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::data::{ExportRow, LabelDraft, LabelSummary, Party, StoredLabel};
use crate::error::Result;
use crate::media::payload;

/// The Library manages the SQLite database holding the labels table.
///
/// It keeps only the database path: every operation opens its own
/// connection and drops it before returning, whether it succeeded or not.
pub struct Library {
    db_path: PathBuf,
}

impl Library {
    /// Open the library at `db_path`, creating the parent directory and
    /// the labels table if they don't exist yet.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let library = Library { db_path };
        library.ensure_schema()?;

        info!("Database initialized at: {}", library.db_path.display());
        Ok(library)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Create the labels table if it doesn't exist.
    /// An existing table is left exactly as it is.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS labels (
                id                    INTEGER PRIMARY KEY AUTOINCREMENT,
                image_name            TEXT NOT NULL,
                image_path            TEXT NOT NULL,
                image_base64          TEXT,
                product_name          TEXT,
                manufacturer_company  TEXT,
                manufacturer_address  TEXT,
                manufacturer_phone    TEXT,
                importer_company      TEXT,
                importer_address      TEXT,
                importer_phone        TEXT,
                manufacturing_date    TEXT,
                expiry_date           TEXT,
                type                  TEXT
            )",
            [],
        )?;

        // Speeds up the browse filter
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_labels_type ON labels(type)",
            [],
        )?;

        debug!("Database schema ready");
        Ok(())
    }

    /// Store a validated draft and return the new label ID.
    ///
    /// The image file is encoded first; if it can't be read nothing is
    /// written and no connection is opened.
    pub fn insert(&self, draft: &LabelDraft) -> Result<i64> {
        let image_base64 = payload::encode_file(Path::new(&draft.image_path))?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO labels (
                image_name, image_path, image_base64, product_name,
                manufacturer_company, manufacturer_address, manufacturer_phone,
                importer_company, importer_address, importer_phone,
                manufacturing_date, expiry_date, type
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                draft.image_name,
                draft.image_path,
                image_base64,
                draft.product_name,
                draft.manufacturer_company,
                draft.manufacturer_address,
                draft.manufacturer_phone,
                draft.importer_company,
                draft.importer_address,
                draft.importer_phone,
                draft.manufacturing_date,
                draft.expiry_date,
                draft.label_type,
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!("Saved label {} for {}", id, draft.image_name);
        Ok(id)
    }

    /// Summary rows in insertion order, optionally limited to one type.
    ///
    /// The filter is an exact, case-sensitive match; `None` or an empty
    /// string returns every row.
    pub fn list(&self, type_filter: Option<&str>) -> Result<Vec<LabelSummary>> {
        let conn = self.connect()?;

        let summaries = match type_filter.filter(|t| !t.is_empty()) {
            Some(label_type) => {
                let mut stmt = conn.prepare(
                    "SELECT image_name, product_name, manufacturer_company, manufacturing_date, type
                     FROM labels WHERE type = ?1 ORDER BY id",
                )?;
                let rows = stmt.query_map([label_type], summary_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT image_name, product_name, manufacturer_company, manufacturing_date, type
                     FROM labels ORDER BY id",
                )?;
                let rows = stmt.query_map([], summary_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };

        Ok(summaries)
    }

    /// Every non-empty type currently in use, once each, sorted
    pub fn distinct_types(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT type FROM labels
             WHERE type IS NOT NULL AND type != ''
             ORDER BY type",
        )?;
        let types = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(types)
    }

    /// Every column of every row, for the JSON export
    pub fn all_labels(&self) -> Result<Vec<StoredLabel>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, image_name, image_path, image_base64, product_name,
                    manufacturer_company, manufacturer_address, manufacturer_phone,
                    importer_company, importer_address, importer_phone,
                    manufacturing_date, expiry_date, type
             FROM labels ORDER BY id",
        )?;

        let labels = stmt
            .query_map([], |row| {
                Ok(StoredLabel {
                    id: row.get(0)?,
                    image_name: row.get(1)?,
                    image_path: row.get(2)?,
                    image_base64: row.get(3)?,
                    product_name: row.get(4)?,
                    manufacturer: Party {
                        company_name: row.get(5)?,
                        address: row.get(6)?,
                        phone: row.get(7)?,
                    },
                    importer: Party {
                        company_name: row.get(8)?,
                        address: row.get(9)?,
                        phone: row.get(10)?,
                    },
                    manufacturing_date: row.get(11)?,
                    expiry_date: row.get(12)?,
                    label_type: row.get(13)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(labels)
    }

    /// The CSV projection of every row (no payload, no addresses)
    pub fn export_rows(&self) -> Result<Vec<ExportRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, image_name, product_name,
                    manufacturer_company, manufacturer_phone,
                    importer_company, importer_phone,
                    manufacturing_date, expiry_date, type
             FROM labels ORDER BY id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ExportRow {
                    id: row.get(0)?,
                    image_name: text(row, 1)?,
                    product_name: text(row, 2)?,
                    manufacturer_company: text(row, 3)?,
                    manufacturer_phone: text(row, 4)?,
                    importer_company: text(row, 5)?,
                    importer_phone: text(row, 6)?,
                    manufacturing_date: text(row, 7)?,
                    expiry_date: text(row, 8)?,
                    label_type: text(row, 9)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Get a count of labels in the library
    pub fn label_count(&self) -> Result<i64> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM labels", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<LabelSummary> {
    Ok(LabelSummary {
        image_name: text(row, 0)?,
        product_name: text(row, 1)?,
        manufacturer_company: text(row, 2)?,
        manufacturing_date: text(row, 3)?,
        label_type: text(row, 4)?,
    })
}

/// Read a nullable text column, NULL becoming an empty string
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("db_path", &self.db_path)
            .finish()
    }
}
