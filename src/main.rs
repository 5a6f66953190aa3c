use assistant::{AssistantConfig, BriefWriter, Recommender, completion_client};
use domain::{AppState, Roster};
use env_logger::Env;
use log::info;
use std::time::Instant;
use web::{AppData, RefConnectServer, Settings};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    let assistant_config = AssistantConfig::from_env();

    info!(
        "availability: {:?}, ranking: {:?}",
        settings.availability, settings.ranking
    );

    let state = match &settings.roster_path {
        Some(path) => {
            let now = Instant::now();

            let roster = Roster::load(path)?;
            let state = AppState::from_roster(roster)?;

            info!(
                "roster loaded: {} clubs, {} referees in {} ms",
                state.clubs().len(),
                state.referees().len(),
                now.elapsed().as_millis()
            );

            state
        }
        None => AppState::new(),
    };

    let client = completion_client(&assistant_config);

    let data = AppData::new(
        state,
        Recommender::new(client.clone(), settings.ranking),
        BriefWriter::new(client),
        settings,
    );

    RefConnectServer::new(data).run().await?;

    Ok(())
}
