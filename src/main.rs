mod cli;
use cli::{config::config, list::list, press::press, send::send};

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;

#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH")]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(visible_alias = "ls")]
    #[command(about = "List the kenku buttons of a markdown note")]
    List {
        #[arg(index = 1, value_name = "NOTE")]
        note: String,
    },
    #[command(about = "Press a button of a markdown note, numbered as in `list`")]
    Press {
        #[arg(index = 1, value_name = "NOTE")]
        note: String,
        #[arg(index = 2, value_name = "INDEX")]
        index: usize,
    },
    #[command(about = "Send a single directive, e.g. \"action=play, type=soundboard, id=1234\"")]
    Send {
        #[arg(index = 1, value_name = "DIRECTIVE")]
        directive: String,
    },
    #[command(about = "Show or set the Kenku FM server base URL")]
    Config {
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { note } => list(&note, cli.config_path),
        Commands::Press { note, index } => press(&note, index, cli.config_path).await,
        Commands::Send { directive } => send(&directive, cli.config_path).await,
        Commands::Config { base_url } => config(base_url, cli.config_path),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
