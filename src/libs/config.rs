use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::libs::{logo, todos::DEFAULT_TODOS_FILE};

#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true, long_about = None, ignore_errors = true)]
pub struct ConfigArg {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug, PartialEq, Deserialize)]
#[command(version, about = "Update the status marker of a task in TODOS.md", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "task description, matched literally and ignoring case")]
    pub task: String,

    #[arg(short, long, help = "completada, pendiente or en_progreso")]
    pub status: String,

    #[serde(default = "default_todos_file")]
    #[arg(short, long, default_value = DEFAULT_TODOS_FILE)]
    pub file: PathBuf,

    #[serde(skip)]
    #[arg(short, long, help = "read task, status and file from a json file instead")]
    pub config: Option<PathBuf>,
}

fn default_todos_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODOS_FILE)
}

pub fn load_config(path: &Path) -> Result<Args> {
    let content =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    let args = serde_json::from_str::<Args>(&content)
        .with_context(|| format!("{} is not a valid config file", path.display()))?;
    Ok(args)
}

pub fn parse_args(config_arg: Option<PathBuf>) -> Result<Args> {
    match config_arg {
        Some(path) => load_config(&path),
        None => Ok(Args::parse()),
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Convert logo.webp into logo.png and a multi-size icon.ico", long_about = None)]
pub struct LogoArgs {
    #[arg(long, default_value = logo::DEFAULT_INPUT)]
    pub input: PathBuf,

    #[arg(long, default_value = logo::DEFAULT_PNG)]
    pub png: PathBuf,

    #[arg(long, default_value = logo::DEFAULT_ICO)]
    pub ico: PathBuf,
}
