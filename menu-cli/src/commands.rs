//! Command handlers.

use std::sync::Mutex;

use anyhow::Result;
use anyhow::bail;
use log::info;
use menu_lib::ItemId;
use menu_lib::MenuClient;
use menu_lib::detail::DishDetail;
use menu_lib::detail::fields;
use menu_lib::form::ErrorDisplay;
use menu_lib::model::Dish;
use menu_lib::model::Leader;
use menu_lib::model::Promotion;

use crate::args::Cli;
use crate::args::Commands;
use crate::config::Config;

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    info!("Using backend at {}", base_url);

    let mut builder = MenuClient::builder().url(base_url);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    match cli.command {
        Commands::Dishes => {
            for dish in client.dishes().await? {
                print_dish_line(&dish);
            }
        }
        Commands::Dish { id } => show_dish(&client, ItemId::from(id)).await?,
        Commands::Comment {
            dish_id,
            author,
            comment,
            rating,
        } => post_comment(&client, ItemId::from(dish_id), &author, &comment, &rating).await?,
        Commands::Promotions => {
            for promotion in client.promotions().await? {
                print_promotion(&promotion);
            }
        }
        Commands::Leaders => {
            for leader in client.leaders().await? {
                print_leader(&leader);
            }
        }
        Commands::Featured => {
            let dish = client.featured_dish().await?;
            let promotion = client.featured_promotion().await?;
            let leader = client.featured_leader().await?;

            println!("Dish:");
            print_dish_line(&dish);
            println!("Promotion:");
            print_promotion(&promotion);
            println!("Leader:");
            print_leader(&leader);
        }
    }

    Ok(())
}

async fn show_dish(client: &MenuClient, id: ItemId) -> Result<()> {
    let mut detail = DishDetail::new();
    detail.load(client, &id).await?;

    if let Some(message) = detail.error_message() {
        bail!("{}", message);
    }
    let Some(dish) = detail.dish() else {
        bail!("dish {} not loaded", id);
    };

    println!("{} ({})", dish.name, dish.category);
    if !dish.label.is_empty() {
        println!("  [{}]", dish.label);
    }
    println!("  ${}", dish.price);
    println!("  {}", dish.description);

    if dish.comments.is_empty() {
        println!("\nNo comments yet.");
    } else {
        println!("\nComments:");
        for comment in &dish.comments {
            println!("  {} stars - {}", comment.rating, comment.comment);
            println!("    -- {}, {}", comment.author, comment.date);
        }
        if let Some(avg) = dish.average_rating() {
            println!("  average: {:.1}", avg);
        }
    }

    if let Some(n) = detail.neighbors() {
        println!("\n< {}    {} >", n.prev, n.next);
    }
    Ok(())
}

async fn post_comment(
    client: &MenuClient,
    dish_id: ItemId,
    author: &str,
    comment: &str,
    rating: &str,
) -> Result<()> {
    let mut detail = DishDetail::new();
    detail.load(client, &dish_id).await?;
    if let Some(message) = detail.error_message() {
        bail!("{}", message);
    }

    let form = detail.comment_form_mut();
    let shown = Mutex::new(ErrorDisplay::default());
    form.on_change(move |errors| {
        let Ok(mut shown) = shown.lock() else { return };
        for (field, message) in errors.changes(&shown) {
            eprintln!("{}: {}", field, message.trim_end());
        }
        *shown = errors.clone();
    });
    form.set_value(fields::AUTHOR, author);
    form.set_value(fields::COMMENT, comment);
    form.set_value(fields::RATING, rating);

    let posted = detail.submit(client).await?;
    if let Some(message) = detail.error_message() {
        bail!("{}", message);
    }

    println!(
        "Posted {}-star comment by {} on {}",
        posted.rating, posted.author, dish_id
    );
    Ok(())
}

fn print_dish_line(dish: &Dish) {
    println!(
        "{:>4}  {:<24} {:<10} ${}",
        dish.id, dish.name, dish.category, dish.price
    );
}

fn print_promotion(promotion: &Promotion) {
    println!("{:>4}  {} (${})", promotion.id, promotion.name, promotion.price);
    println!("      {}", promotion.description);
}

fn print_leader(leader: &Leader) {
    println!("{:>4}  {}, {} ({})", leader.id, leader.name, leader.designation, leader.abbr);
}
