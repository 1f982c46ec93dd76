use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct EmbeddedCommand {
    #[command(subcommand)]
    command: EmbeddedSubcommand,
}

#[derive(Debug, Subcommand)]
enum EmbeddedSubcommand {
    List(list::ListEmbeddedArgs),
}

pub(crate) async fn run(command: EmbeddedCommand) -> Result<(), String> {
    match command.command {
        EmbeddedSubcommand::List(args) => list::run(&args).await,
    }
}
