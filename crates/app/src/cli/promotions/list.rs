use clap::Args;
use promotions_app::{
    database::{self, Db},
    domain::promotions::{PgPromotionsService, PromotionsService, data::PromotionFilter},
};

#[derive(Debug, Args)]
pub(crate) struct ListPromotionsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only list promotions with this active flag
    #[arg(long)]
    active: Option<bool>,
}

pub(crate) async fn run(args: ListPromotionsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPromotionsService::new(Db::new(pool));

    let filter = args
        .active
        .map_or(PromotionFilter::All, PromotionFilter::Active);

    let promotions = service
        .list_promotions(filter)
        .await
        .map_err(|error| format!("failed to list promotions: {error}"))?;

    if promotions.is_empty() {
        println!("no promotions found");
        return Ok(());
    }

    for promotion in promotions {
        println!("id: {}", promotion.id);
        println!("title: {}", promotion.title);
        println!("promotion_type: {}", promotion.promotion_type);
        println!("start_date: {}", promotion.start_date);
        println!("end_date: {}", promotion.end_date);
        println!("active: {}", promotion.active);
        println!();
    }

    Ok(())
}
