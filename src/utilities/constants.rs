pub const DEFAULT_INPUT_FILE: &str = "../scryfall_cards/scryfall-default-cards.json";
pub const DEFAULT_OUTPUT_FILE: &str = "../trimmed_cards/trimmed_scryfall_cards.csv";

/// Layouts that are not standalone cards (tokens, emblems and friends).
pub const SKIP_LAYOUTS: [&str; 6] = [
    "token",
    "emblem",
    "art_series",
    "augment",
    "host",
    "double_faced_token",
];

pub const CSV_HEADERS: [&str; 9] = [
    "name",
    "set",
    "rarity",
    "cmc",
    "colors",
    "type_line",
    "usd",
    "usd_foil",
    "image",
];
