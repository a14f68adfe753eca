mod cli;

use cli::commands::Command;
use cli::SanAnalyzer;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    SanAnalyzer::from_args().execute();
}
