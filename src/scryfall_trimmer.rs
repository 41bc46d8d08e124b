use std::collections::HashSet;
use std::error::Error;

use log::debug;
use serde_json::Value;

use crate::cards::trimmed_card::TrimmedCard;
use crate::utilities::constants::SKIP_LAYOUTS;
use crate::utilities::file_management::load_from_json_file;

pub struct ScryfallTrimmer {
    skip_layouts: HashSet<&'static str>,
}

impl ScryfallTrimmer {
    pub fn new(skip_layouts: Option<HashSet<&'static str>>) -> Self {
        ScryfallTrimmer {
            skip_layouts: skip_layouts.unwrap_or_else(|| SKIP_LAYOUTS.into_iter().collect()),
        }
    }

    /// Loads the whole bulk file into memory. The top level of the document
    /// must be a json array of card objects; anything else is fatal.
    pub fn load_cards(&self, path: &str) -> Result<Vec<Value>, Box<dyn Error>> {
        let cards: Value = load_from_json_file(path)?;
        match cards {
            Value::Array(cards_array) => Ok(cards_array),
            _ => Err("Expected a top level json array of cards".into()),
        }
    }

    fn is_english(&self, obj: &Value) -> bool {
        obj["lang"] == "en"
    }

    fn is_skipped_layout(&self, obj: &Value) -> bool {
        obj["layout"]
            .as_str()
            .is_some_and(|layout| self.skip_layouts.contains(layout))
    }

    fn is_digital_only(&self, obj: &Value) -> bool {
        obj["digital"].as_bool().unwrap_or(false)
    }

    fn should_keep(&self, obj: &Value) -> bool {
        if !self.is_english(obj) {
            debug!("Skipping non english card: {}", obj["name"]);
            return false;
        }
        if self.is_skipped_layout(obj) {
            debug!("Skipping {} layout card: {}", obj["layout"], obj["name"]);
            return false;
        }
        if self.is_digital_only(obj) {
            debug!("Skipping digital only card: {}", obj["name"]);
            return false;
        }
        true
    }

    /// Keeps paper english cards with a playable layout and reduces each one
    /// to the nine csv columns. Input order is preserved.
    pub fn trim_cards(&self, all_cards: &[Value]) -> Vec<TrimmedCard> {
        all_cards
            .iter()
            .filter(|obj| self.should_keep(obj))
            .map(|obj| self.extract_card(obj))
            .collect()
    }

    fn extract_card(&self, obj: &Value) -> TrimmedCard {
        let colors = obj["colors"]
            .as_array()
            .map(|colors| {
                colors
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<&str>>()
                    .join(", ")
            })
            .unwrap_or_default();

        // image_uris is missing entirely on multi faced cards, so check for
        // the key before reaching into it.
        let image = match obj.get("image_uris") {
            Some(image_uris) => image_uris["normal"].as_str().map(str::to_string),
            None => None,
        };

        TrimmedCard {
            name: obj["name"].as_str().map(str::to_string),
            set: obj["set"].as_str().map(str::to_string),
            rarity: obj["rarity"].as_str().map(str::to_string),
            cmc: obj["cmc"].as_f64(),
            colors,
            type_line: obj["type_line"].as_str().map(str::to_string),
            usd: obj["prices"]["usd"].as_str().map(str::to_string),
            usd_foil: obj["prices"]["usd_foil"].as_str().map(str::to_string),
            image,
        }
    }
}
