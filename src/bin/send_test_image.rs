//! Test client: POST a single image to the prediction endpoint
//!
//! Sends one blocking multipart request and prints the JSON response. Any
//! failure (unreachable server, bad path, non-JSON reply) is printed and the
//! process exits normally. No timeout is configured, so an unresponsive
//! server hangs the request.

use std::path::PathBuf;

use clap::Parser;

/// Send a test image to the classifier service
#[derive(Parser, Debug)]
#[command(name = "send_test_image")]
#[command(about = "POST an image to the /predict endpoint and print the response")]
struct Cli {
    /// Path to the image file to upload
    #[arg(default_value = "data/image.jpg")]
    image: PathBuf,

    /// Prediction endpoint URL
    #[arg(long, default_value = "http://localhost:8000/predict")]
    url: String,
}

fn run(cli: &Cli) -> anyhow::Result<serde_json::Value> {
    let form = reqwest::blocking::multipart::Form::new().file("file", &cli.image)?;

    let response = reqwest::blocking::Client::new()
        .post(&cli.url)
        .multipart(form)
        .send()?;

    Ok(response.json()?)
}

fn main() {
    let cli = Cli::parse();

    println!("Sending request...");
    match run(&cli) {
        Ok(json) => println!("Response: {json}"),
        Err(e) => println!("An error occurred: {e}"),
    }
}
