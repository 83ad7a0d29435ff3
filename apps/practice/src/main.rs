use std::process;

fn main() {
    if let Err(e) = lingo_practice::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
