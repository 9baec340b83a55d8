#[tokio::main]
async fn main() {
    if let Err(e) = frontdesk_lib::run().await {
        eprintln!("frontdesk: {e}");
        std::process::exit(1);
    }
}
