#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = fieldtree_cli::run_from_env() {
        eprintln!("fieldtree: {error}");
        std::process::exit(error.exit_code());
    }
}
