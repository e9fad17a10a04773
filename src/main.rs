use clap::Parser;

use dirsift::cli::{Cli, Commands};
use dirsift::commands::{run_config, run_init, run_tree, run_walk, setup_logging};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Walk(args) => run_walk(args, &cli),
        Commands::Tree(args) => run_tree(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
