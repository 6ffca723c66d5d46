use boxy::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    boxy_cli::run(std::env::args().skip(1).collect())
}
