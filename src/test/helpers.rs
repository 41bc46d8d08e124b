use serde_json::{json, Value};

use crate::cards::trimmed_card::TrimmedCard;

pub fn full_english_card() -> Value {
    json!({
        "name": "Burning-Tree Emissary",
        "lang": "en",
        "layout": "normal",
        "set": "gtc",
        "rarity": "uncommon",
        "cmc": 2.0,
        "colors": ["G", "R"],
        "type_line": "Creature — Human Shaman",
        "digital": false,
        "prices": {
            "usd": "0.25",
            "usd_foil": "1.10",
            "eur": "0.15"
        },
        "image_uris": {
            "normal": "https://cards.scryfall.io/normal/front/5/7/57f25ead.jpg"
        }
    })
}

pub fn japanese_card() -> Value {
    json!({
        "name": "闇の腹心",
        "lang": "ja",
        "layout": "normal",
        "set": "rav",
        "rarity": "rare",
        "digital": false
    })
}

pub fn token_card() -> Value {
    json!({
        "name": "Soldier",
        "lang": "en",
        "layout": "token",
        "set": "tgtc",
        "rarity": "common",
        "digital": false
    })
}

pub fn digital_card() -> Value {
    json!({
        "name": "Oracle of the Alpha",
        "lang": "en",
        "layout": "normal",
        "set": "ymid",
        "rarity": "mythic",
        "digital": true
    })
}

/// English paper card with no colors, prices or image_uris keys at all.
pub fn english_card_without_nested_fields() -> Value {
    json!({
        "name": "Static Orb",
        "lang": "en",
        "layout": "normal",
        "set": "7ed",
        "rarity": "rare",
        "cmc": 3.0,
        "type_line": "Artifact",
        "digital": false
    })
}

pub fn trimmed_full_card() -> TrimmedCard {
    TrimmedCard {
        name: Some("Burning-Tree Emissary".to_string()),
        set: Some("gtc".to_string()),
        rarity: Some("uncommon".to_string()),
        cmc: Some(2.0),
        colors: "G, R".to_string(),
        type_line: Some("Creature — Human Shaman".to_string()),
        usd: Some("0.25".to_string()),
        usd_foil: Some("1.10".to_string()),
        image: Some("https://cards.scryfall.io/normal/front/5/7/57f25ead.jpg".to_string()),
    }
}

pub fn trimmed_sparse_card() -> TrimmedCard {
    TrimmedCard {
        name: Some("Static Orb".to_string()),
        set: Some("7ed".to_string()),
        rarity: Some("rare".to_string()),
        cmc: Some(3.0),
        colors: "".to_string(),
        type_line: Some("Artifact".to_string()),
        usd: None,
        usd_foil: None,
        image: None,
    }
}
