//! CSV export for spreadsheets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::api::Item;
use crate::error::{Error, Result};

/// Byte-order mark so spreadsheet applications detect UTF-8.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Header row, in column order.
pub const HEADERS: [&str; 7] = [
    "ID",
    "タイトル",
    "URL",
    "投稿日",
    "更新日",
    "いいね数",
    "タグ",
];

/// Timestamp format for the date columns.
pub const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Separator between tag names in the tags column.
const TAG_SEPARATOR: &str = ", ";

/// Map an item to its CSV row.
pub fn item_record(item: &Item) -> [String; 7] {
    [
        item.id.clone(),
        item.title.clone(),
        item.url.clone(),
        item.created_at.format(DATE_FORMAT).to_string(),
        item.updated_at.format(DATE_FORMAT).to_string(),
        item.likes_count.to_string(),
        item.tag_names().collect::<Vec<_>>().join(TAG_SEPARATOR),
    ]
}

/// Write the BOM, header row and one row per item to `writer`.
pub fn write_items<W: Write>(mut writer: W, items: &[Item]) -> std::result::Result<(), csv::Error> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for item in items {
        csv_writer.write_record(item_record(item))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export items to a CSV file at `path`, replacing any existing file.
pub fn export_items(items: &[Item], path: &Path) -> Result<()> {
    tracing::info!("Exporting {} items to {}", items.len(), path.display());

    let file = File::create(path).map_err(|source| Error::Io {
        action: "create",
        path: path.to_path_buf(),
        source,
    })?;

    write_items(BufWriter::new(file), items).map_err(|e| write_error(path, e))?;

    tracing::debug!("Finished writing {}", path.display());
    Ok(())
}

fn write_error(path: &Path, err: csv::Error) -> Error {
    let io_kind = match err.kind() {
        csv::ErrorKind::Io(source) => Some(source.kind()),
        _ => None,
    };

    match io_kind {
        Some(kind) => Error::Io {
            action: "write",
            path: path.to_path_buf(),
            source: std::io::Error::new(kind, err),
        },
        None => Error::Export {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
