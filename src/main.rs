mod domain;
mod frameworks;
mod interface_adapters;
mod use_cases;

use frameworks::app;

#[tokio::main]
async fn main() {
    app::run().await;
}
