use log::info;
use rust_crawl_server::config::Config;
use rust_crawl_server::server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let config = Config::load();

    info!("Crawl server starting:");
    info!("  Bind address: {}", config.bind_addr());
    info!("  Navigation timeout: {}s", config.browser.timeout_secs);
    info!("  Headless: {}", config.browser.headless);

    let server = server::build_server(config)?;
    server.await
}
