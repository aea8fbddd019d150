use clap::{Parser, Subcommand};

mod db;
mod promotions;

#[derive(Debug, Parser)]
#[command(name = "promotions-app", about = "Promotions CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Promotions(promotions::PromotionsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Promotions(command) => promotions::run(command).await,
        }
    }
}
