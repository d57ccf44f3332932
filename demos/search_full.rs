use googrank::{ scrape, SearchRequest };

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = SearchRequest::new("Best restaurants in San Francisco", "us", "en")
        .pages(2)
        .per_page(10)
        .backoff(2);

    let results = scrape(&request).await?;

    println!("Full Search Results:");
    for result in &results {
        println!("{}. {}", result.rank, result.title);
        println!("   URL: {}", result.url);
        println!("   Description: {}", result.description);
        println!();
    }

    Ok(())
}
