mod cards;
mod csv_writer;
mod scryfall_trimmer;
mod test;
mod utilities;

use log::info;

use crate::csv_writer::write_cards_to_csv;
use crate::scryfall_trimmer::ScryfallTrimmer;
use crate::utilities::config::CONFIG;

fn run_pipeline(input_file: &str, output_file: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("Reading scryfall card database file: {}", input_file);

    let trimmer = ScryfallTrimmer::new(None);
    let all_cards = trimmer.load_cards(input_file)?;
    info!("Total cards loaded: {}", all_cards.len());

    let trimmed_cards = trimmer.trim_cards(&all_cards);
    info!("Cards after filtering: {}", trimmed_cards.len());

    write_cards_to_csv(output_file, &trimmed_cards)?;
    info!("Csv file created at: {}", output_file);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let start_time = chrono::prelude::Local::now();
    info!("Starting at {}", start_time);

    run_pipeline(&CONFIG.input_file, &CONFIG.output_file)?;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Trimming started at: {}. Finished at: {}. Took: {} seconds",
        start_time,
        end_time,
        (end_time - start_time).num_seconds()
    );

    Ok(())
}
