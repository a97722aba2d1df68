use pexels::{client::Client, photo::PhotoSize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("PEXELS_API_KEY").map_err(|_| "PEXELS_API_KEY isn't set")?;

    let client = Client::new(token)?;

    match client.random_photo() {
        Ok(photo) => println!(
            "#{} by {}: {}",
            photo.id,
            photo.photographer_name,
            photo.sources.get(PhotoSize::Large)
        ),
        Err(e) => println!("couldn't get a random photo: {}", e),
    }

    match client.random_video() {
        Ok(video) => println!("#{}: {}", video.id, video.page_url),
        Err(e) => println!("couldn't get a random video: {}", e),
    }

    Ok(())
}
