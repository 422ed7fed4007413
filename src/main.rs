//! kraken - interactive `<alias>.<verb>` command console.

fn main() {
    if let Err(e) = kraken_console::cli::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
