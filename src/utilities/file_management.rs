use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::de::DeserializeOwned;

pub fn load_from_json_file<T>(path: &str) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let data = serde_json::from_reader(reader)?;
    Ok(data)
}
