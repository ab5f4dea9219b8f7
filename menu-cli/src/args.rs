use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "menu")]
#[command(about = "Browse the restaurant menu and comment on dishes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides the config file).
    #[arg(long, env = "MENU_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every dish on the menu.
    Dishes,

    /// Show one dish with its comments and its neighbours.
    Dish { id: String },

    /// Comment on a dish.
    Comment {
        /// Dish to comment on.
        dish_id: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        comment: String,

        #[arg(long, default_value = "5")]
        rating: String,
    },

    /// List promotions.
    Promotions,

    /// List the leadership team.
    Leaders,

    /// Show the featured dish, promotion and leader.
    Featured,
}
