#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = glyphrun_inspect::run_from_env() {
        eprintln!("glyphrun-inspect: {error}");
        std::process::exit(error.exit_code());
    }
}
