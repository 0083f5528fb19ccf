#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    hs_portfolio::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    hs_portfolio::frontend::run();
}
