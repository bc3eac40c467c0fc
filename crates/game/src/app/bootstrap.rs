use benji_engine::{resolve_app_paths, AppPaths, FileStore, Game, LoopConfig, StartupError};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) paths: AppPaths,
    pub(crate) game: Box<dyn Game>,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    init_tracing();
    info!("=== Benji Startup ===");

    let paths = resolve_app_paths()?;
    info!(
        root = %paths.root.display(),
        sprite_dir = %paths.sprite_dir.display(),
        save_dir = %paths.save_dir.display(),
        "app_paths_resolved"
    );

    let store = FileStore::new(paths.save_dir.clone());
    let game = gameplay::build_game(Box::new(store));

    Ok(AppWiring {
        config: LoopConfig::default(),
        paths,
        game,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
