use clap::Parser;

fn main() {
    let cli = kprofile::cli::Cli::parse();

    if let Err(err) = kprofile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
