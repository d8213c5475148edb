// menu-client/examples/browse_menu.rs
// Fetch a restaurant by id and walk the menu, specials and announcements

use chrono::Utc;
use menu_client::{ClientConfig, MenuSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <restaurant_id> [--dev]", args[0]);
        println!("  Example: {} 1 --dev", args[0]);
        return Ok(());
    }
    let restaurant_id: i64 = args[1].parse()?;

    let config = if args.iter().any(|a| a == "--dev") {
        ClientConfig::dev()
    } else {
        ClientConfig::from_env()
    };
    tracing::info!(base_url = %config.base_url, "using menu API");

    let mut session = MenuSession::new(&config);

    if session.load_restaurant(restaurant_id).await.is_err() {
        anyhow::bail!(
            "{}",
            session
                .store()
                .restaurant_error()
                .unwrap_or("invalid restaurant id")
        );
    }

    let record = session.store().restaurant().expect("record just loaded");
    println!("{} | {} ({})", record.name, record.address, record.phone);
    for group in &record.menu_groups {
        println!("  [{}]", group.group_type.to_uppercase());
        for category in &group.categories {
            if category.is_disabled {
                continue;
            }
            println!("    {}", category.name);
            for item in &category.items {
                println!("      {} - {}", item.name, item.price);
            }
        }
    }

    // Today's specials, tolerating a missing endpoint
    if session.load_highlighted_items(restaurant_id).await.is_ok()
        && session.poll_highlighted_reveal()
    {
        println!("\nToday's specials:");
        for item in session.store().highlighted_items() {
            println!("  {} - {}", item.name, item.price);
        }
        session.dismiss_highlighted();
    }

    // Announcements, shown once, in sequence
    if session.poll_announcements() {
        let now = Utc::now();
        while let Some(a) = session.current_announcement() {
            if a.is_live(now) {
                println!("\n{}\n   {}", a.title, a.message);
            }
            session.dismiss_announcement();
        }
    }

    Ok(())
}
