// RecoMate — service entry point.
//
// Configuration is environment-only:
//   RECOMATE_BIND          listen address        (default 0.0.0.0)
//   RECOMATE_PORT          listen port           (default 5000)
//   RECOMATE_DB            SQLite path           (default recomate.db)
//   RECOMATE_CATALOG_DIR   catalog JSON directory (default ./catalog)
//   RECOMATE_TRANSLATE_URL translation backend   (default http://127.0.0.1:5050)

use log::info;
use recomate::atoms::error::ServiceResult;
use recomate::engine::catalog::Catalog;
use recomate::engine::identity::AnonymousIdentity;
use recomate::engine::intent::KeywordIntentModel;
use recomate::engine::store::DocStore;
use recomate::engine::translate::{HttpTranslator, TranslationService};
use recomate::engine::Engine;
use recomate::server;
use std::path::PathBuf;
use std::sync::Arc;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> ServiceResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bind = env_or("RECOMATE_BIND", "0.0.0.0");
    let port = env_or("RECOMATE_PORT", "5000");
    let db_path = PathBuf::from(env_or("RECOMATE_DB", "recomate.db"));
    let catalog_dir = PathBuf::from(env_or("RECOMATE_CATALOG_DIR", "catalog"));
    let translate_url = env_or("RECOMATE_TRANSLATE_URL", "http://127.0.0.1:5050");

    let store = Arc::new(DocStore::open(&db_path)?);
    let catalog = Catalog::load_dir(&catalog_dir)?;
    let translator = TranslationService::new(store.clone(), Box::new(HttpTranslator::new(translate_url)));

    let engine = Arc::new(Engine::new(
        store,
        catalog,
        translator,
        Box::new(KeywordIntentModel),
        Box::new(AnonymousIdentity),
    ));

    let addr = format!("{bind}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[server] Listening on http://{addr}");

    axum::serve(listener, server::router(engine)).await?;
    Ok(())
}
