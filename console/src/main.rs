mod extend;
mod search;
mod utils;

use clap::{Parser, Subcommand};
use extend::ExtendArgs;
use search::SearchArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(about = "Find genes overlapping a chromosomal interval")]
    Search {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  SearchArgs,
    },

    #[command(about = "Append a new assembly version's columns to a table")]
    Extend {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ExtendArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Search { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Extend { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
