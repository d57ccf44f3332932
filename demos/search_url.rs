use googrank::build_request_urls;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let urls = build_request_urls("Best restaurants in San Francisco", "uk", "en", 3, 10)?;

    println!("Request URLs:");
    for (i, url) in urls.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }

    Ok(())
}
