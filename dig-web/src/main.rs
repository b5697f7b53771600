use tracing::{info, Level};

fn configure_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Logger already initialized: {e}");
    }
}

fn main() {
    configure_logging();
    info!("Starting crate digger");
    dioxus::launch(dig_web::App);
}
