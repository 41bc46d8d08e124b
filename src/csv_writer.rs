use std::error::Error;
use std::fs::File;
use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::cards::trimmed_card::TrimmedCard;
use crate::utilities::constants::CSV_HEADERS;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Writes the trimmed cards as a csv file that Excel opens cleanly: utf-8
/// with a leading BOM, crlf row endings, header row first. An existing file
/// at the path is overwritten. Missing values become empty cells.
pub fn write_cards_to_csv(path: &str, cards: &[TrimmedCard]) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    // The header is written explicitly so an empty card list still produces
    // a header-only file.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(file);
    writer.write_record(CSV_HEADERS)?;
    for card in cards {
        writer.serialize(card)?;
    }
    writer.flush()?;

    Ok(())
}
