use serde::{Deserialize, Serialize};

/// The nine columns kept from a raw scryfall card. Field order here is the
/// column order in the csv file.
///
/// `colors` is always a string (comma-joined short codes, empty when the card
/// is colorless); every other missing field becomes `None` and serializes as
/// an empty cell.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrimmedCard {
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub cmc: Option<f64>,
    pub colors: String,
    pub type_line: Option<String>,
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub image: Option<String>,
}
