//! Render the bills page from the fixture store, optionally serving it
//!
//! ```text
//! cargo run --example bills_page            # print the HTML
//! cargo run --example bills_page -- serve   # preview on http://127.0.0.1:3000/employee/bills
//! ```

use billed::prelude::*;
use billed::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billed=debug".into()),
        )
        .init();

    let config = match std::env::var("BILLED_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    };
    let bind_addr = config.server.bind_addr.clone();

    let session = InMemorySessionStorage::new();
    SessionUser::employee("employee@test.tld").store(&session)?;

    let router = Router::install(
        NavigationContext::new(
            Arc::new(MockStore::with_fixtures()),
            Arc::new(session),
            config,
        ),
        SharedDocument::new(Document::with_root()),
    );

    if std::env::args().nth(1).as_deref() == Some("serve") {
        return server::serve(router, &bind_addr).await;
    }

    let state = router.on_navigate(ROUTES_PATH.bills)?.settled().await?;
    tracing::info!(?state, "bills page settled");
    println!("{}", router.document().to_html());

    Ok(())
}
