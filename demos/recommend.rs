use anyhow::Result;
use myrrix_client::MyrrixService;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let host = std::env::var("MYRRIX_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("MYRRIX_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let service = MyrrixService::new(&host, port);

    if !service.is_ready().await? {
        println!("Server at {}:{} is not ready yet", host, port);
        return Ok(());
    }

    let users = service.all_user_ids().await?;
    println!("Known users: {}", users.len());

    if let Some(&user_id) = users.first() {
        let recommendations = service.recommend(user_id, Some(10)).await?;
        println!("Top picks for user {}:", user_id);
        for item in recommendations {
            println!("  {:>12}  {:.3}", item.item_id, item.value);
        }
    }

    let anonymous = service
        .recommend_to_anonymous(&[(115287, 0.5), (2299226, 0.7)], Some(5))
        .await?;
    println!("Picks for an anonymous taste profile:");
    for item in anonymous {
        println!("  {:>12}  {:.3}", item.item_id, item.value);
    }

    Ok(())
}
