#[tokio::main]
async fn main() {
    product_api::run().await;
}
