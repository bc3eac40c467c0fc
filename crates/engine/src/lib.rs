use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod app;
pub mod sim;
pub mod storage;
mod sprite_keys;

pub use app::{
    colors, run_app, AppError, CanvasLayout, DrawCommand, DrawLayer, DrawList, Game,
    InputSnapshot, Key, LoopCommand, LoopConfig, LoopMetricsSnapshot, MouseButton, Rgba,
    SpriteAnimation,
};
pub use sim::{
    Collider, ColliderDesc, ColliderId, ColliderRole, CollisionManager, CollisionStats, Contact,
    PhysicsMode, Vec2,
};
pub use sprite_keys::{validate_sprite_key, SpriteKeyError};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

pub const ROOT_ENV_VAR: &str = "BENJI_ROOT";
pub const SAVE_DIR_ENV_VAR: &str = "BENJI_SAVE_DIR";

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub root: PathBuf,
    pub asset_dir: PathBuf,
    pub sprite_dir: PathBuf,
    pub save_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to resolve current executable path: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("current executable path has no parent directory: {0}")]
    ExeHasNoParent(PathBuf),
    #[error("failed to create save directory at {path}: {source}")]
    CreateSaveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "{env_var} is set but does not point to a valid project root: {path}\n\
A valid root must contain Cargo.toml and either crates/ or assets/."
    )]
    InvalidEnvRoot {
        path: PathBuf,
        env_var: &'static str,
    },
    #[error(
        "Could not detect project root by walking upward from executable directory: {start_dir}\n\
Expected a directory containing Cargo.toml and either crates/ or assets/.\n\
Set {env_var} explicitly, for example:\n\
Bash/zsh: export {env_var}=\"/path/to/benji\""
    )]
    RootNotFound {
        start_dir: PathBuf,
        env_var: &'static str,
    },
}

/// Resolves the project root, the sprite directory and the save directory,
/// creating the latter if needed.
pub fn resolve_app_paths() -> Result<AppPaths, StartupError> {
    let root = resolve_root()?;
    let asset_dir = root.join("assets");
    let sprite_dir = asset_dir.join("sprites");
    let save_dir = match read_env_path(SAVE_DIR_ENV_VAR)? {
        Some(dir) => dir,
        None => root.join("saves"),
    };

    fs::create_dir_all(&save_dir).map_err(|source| StartupError::CreateSaveDir {
        path: save_dir.clone(),
        source,
    })?;

    Ok(AppPaths {
        root,
        asset_dir,
        sprite_dir,
        save_dir: normalize_path(&save_dir),
    })
}

fn resolve_root() -> Result<PathBuf, StartupError> {
    if let Some(raw) = read_env_path(ROOT_ENV_VAR)? {
        let normalized = normalize_path(&raw);
        return if is_repo_marker(&normalized) {
            Ok(normalized)
        } else {
            Err(StartupError::InvalidEnvRoot {
                path: normalized,
                env_var: ROOT_ENV_VAR,
            })
        };
    }

    let exe = env::current_exe().map_err(StartupError::CurrentExe)?;
    let exe_dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| StartupError::ExeHasNoParent(exe.clone()))?;

    exe_dir
        .ancestors()
        .find(|candidate| is_repo_marker(candidate))
        .map(normalize_path)
        .ok_or_else(|| StartupError::RootNotFound {
            start_dir: normalize_path(&exe_dir),
            env_var: ROOT_ENV_VAR,
        })
}

fn read_env_path(var: &'static str) -> Result<Option<PathBuf>, StartupError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(StartupError::EnvVar { var, source }),
    }
}

fn is_repo_marker(path: &Path) -> bool {
    let cargo_toml = path.join("Cargo.toml").is_file();
    let has_crates = path.join("crates").is_dir();
    let has_assets = path.join("assets").is_dir();

    cargo_toml && (has_crates || has_assets)
}

fn normalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
