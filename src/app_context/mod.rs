use crate::cli::Args;
use crate::gbif::client::GbifClient;
use crate::gbif::OccurrenceApi;
use crate::personal_best::file::FilePersonalBest;
use crate::personal_best::PersonalBest;
use crate::search::settings::SearchSettings;
use crate::storage::browsers::HashMapBrowserStorage;
use crate::storage::games::HashMapGameStorage;
use crate::storage::interface::IGameStorage;
use crate::wikipedia::client::WikipediaClient;
use crate::wikipedia::EncyclopediaApi;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<GS: IGameStorage> {
    pub games: GS,
    pub browsers: HashMapBrowserStorage,
    pub gbif: Arc<dyn OccurrenceApi>,
    pub encyclopedia: Arc<dyn EncyclopediaApi>,
    pub personal_best: PersonalBest,
    pub settings: Arc<SearchSettings>,
}

/// Per-request data resolved from the path: the game or browser session being addressed.
pub struct RequestContext {
    pub session_id: String,
}

pub async fn init(args: &Args) -> AppContext<HashMapGameStorage> {
    let http_client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build the HTTP client for remote APIs.");
    let personal_best_repo = Arc::new(FilePersonalBest::new(args.personal_best_file.clone()));
    AppContext {
        games: HashMapGameStorage::default(),
        browsers: HashMapBrowserStorage::default(),
        gbif: Arc::new(GbifClient::new(
            http_client.clone(),
            args.gbif_api_url.clone(),
        )),
        encyclopedia: Arc::new(WikipediaClient::new(
            http_client,
            args.wikipedia_api_url.clone(),
        )),
        personal_best: PersonalBest::load(personal_best_repo).await,
        settings: Arc::new(SearchSettings::from(args)),
    }
}
