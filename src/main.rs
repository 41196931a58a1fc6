use clap::Parser;
use glreg_gen::cli::Cli;

fn main() -> glreg_gen::error::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    glreg_gen::run(&cli)
}
