pub mod trimmed_card;
