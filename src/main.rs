fn main() {
    #[cfg(feature = "cli")]
    oxbase58::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("oxbase58: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
