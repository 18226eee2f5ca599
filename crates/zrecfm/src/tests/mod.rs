mod properties;
mod rdw_words;
mod views;
