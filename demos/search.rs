use pexels::client::Client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PEXELS_API_KEY").map_err(|_| "PEXELS_API_KEY isn't set")?;
    let query = std::env::args().nth(1).unwrap_or_else(|| String::from("nature"));

    let client = Client::new(token)?;

    let videos = client.search_videos(&pexels::encode_query(&query), 15, 1)?;

    println!("{} videos for {:?}", videos.total_results, query);

    for video in &videos.items {
        match video.best_rendition() {
            Some(file) => println!(
                "- #{} ({}s): {}",
                video.id, video.duration_seconds, file.download_url
            ),
            None => println!("- #{} ({}s): no file", video.id, video.duration_seconds),
        }
    }

    println!("{} requests left this month", client.remaining_quota());

    Ok(())
}
