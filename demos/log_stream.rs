use std::{io, sync::atomic::AtomicBool};

use nmea0183_reader::{Config, Dispatcher, NmeaReader, logging::log_sentences};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut dispatcher = log_sentences(Dispatcher::new(Config::default()));

    let stop = AtomicBool::new(false);
    if let Err(e) = NmeaReader::new(io::stdin().lock()).run(&mut dispatcher, &stop) {
        eprintln!("Reading stdin failed: {}", e);
        std::process::exit(1);
    }
}
