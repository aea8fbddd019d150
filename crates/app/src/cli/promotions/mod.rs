use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct PromotionsCommand {
    #[command(subcommand)]
    command: PromotionsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionsSubcommand {
    /// Print stored promotions
    List(list::ListPromotionsArgs),
}

pub(crate) async fn run(command: PromotionsCommand) -> Result<(), String> {
    match command.command {
        PromotionsSubcommand::List(args) => list::run(args).await,
    }
}
