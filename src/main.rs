#[tokio::main]
async fn main() {
    if let Err(err) = weekend_validator::run().await {
        eprintln!("weekend-validator failed: {err}");
        std::process::exit(1);
    }
}
