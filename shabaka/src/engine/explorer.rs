use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::config::LinkStyle;
use crate::config::SimulationConfig;
use crate::config::load_config;
use crate::error::EngineError;
use crate::error::Result;
use crate::graph::GraphBuilder;
use crate::handler::SearchHandler;
use crate::model::GraphData;
use crate::source::CovalentClient;
use crate::source::JsonFileSource;
use crate::source::TransactionSource;

#[derive(Debug, Clone, Parser)]
#[command(name = "shabaka", about = "Build a force-graph document from an address's latest transactions")]
pub struct ExplorerArgs {
    /// Address whose transactions are graphed
    #[arg(long)]
    pub address: String,

    #[arg(long, default_value = "Config.toml")]
    pub config: PathBuf,

    /// Overrides `graph.transaction_limit`
    #[arg(long)]
    pub limit: Option<usize>,

    /// Overrides `source.chain_id`
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Read a saved transactions_v2 response instead of calling the API
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Also emit simulation and link styling settings for the layout engine
    #[arg(long)]
    pub scene: bool,
}

/// `{nodes, links}`, optionally with the engine settings the renderer expects
#[derive(Debug, Serialize)]
pub struct SceneDocument<'a> {
    #[serde(flatten)]
    pub graph: GraphData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<&'a SimulationConfig>,
    #[serde(rename = "linkStyle", skip_serializing_if = "Option::is_none")]
    pub link_style: Option<&'a LinkStyle>,
}

/// Where `Explorer::load` got its settings from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// The named file was missing
    Defaults(PathBuf),
}

pub struct Explorer;

impl Explorer {
    pub async fn run() -> Result<()> {
        let _ = dotenvy::dotenv();
        let args = ExplorerArgs::parse();
        let (config, origin) = Self::load(&args)?;

        crate::tracing::setup_tracing("shabaka", &config.logging)?;
        info!("Starting Shabaka (شبكة): The Transaction Web");
        match &origin {
            ConfigOrigin::File(path) => info!("explorer::config::loaded::{}", path.display()),
            ConfigOrigin::Defaults(path) => {
                warn!("explorer::config::not_found::{}::using_defaults", path.display())
            },
        }

        let mut stdout = std::io::stdout().lock();
        Self::execute(&args, &config, &mut stdout).await
    }

    /// Config file (or defaults when it is missing), env, then CLI overrides.
    /// Runs before tracing is installed, so the origin is returned for the
    /// caller to log.
    pub fn load(args: &ExplorerArgs) -> Result<(Config, ConfigOrigin)> {
        let (mut config, origin) = if Path::new(&args.config).exists() {
            (load_config(&args.config)?, ConfigOrigin::File(args.config.clone()))
        } else {
            let mut config = Config::default();
            config.apply_env_overrides();
            (config, ConfigOrigin::Defaults(args.config.clone()))
        };

        if let Some(limit) = args.limit {
            config.graph.transaction_limit = limit;
        }
        if let Some(chain_id) = args.chain_id {
            config.source.chain_id = chain_id;
        }
        config.validate()?;
        Ok((config, origin))
    }

    pub async fn execute<W: Write>(
        args: &ExplorerArgs,
        config: &Config,
        out: &mut W,
    ) -> Result<()> {
        let builder = GraphBuilder::from_config(&config.graph);

        match &args.input {
            Some(path) => {
                info!("explorer::execute::source::file::{}", path.display());
                Self::search_and_write(JsonFileSource::new(path), builder, args, config, out).await
            },
            None => {
                info!("explorer::execute::source::covalent::chain::{}", config.source.chain_id);
                let client = CovalentClient::new(config.source.clone())?;
                Self::search_and_write(client, builder, args, config, out).await
            },
        }
    }

    async fn search_and_write<S: TransactionSource, W: Write>(
        source: S,
        builder: GraphBuilder,
        args: &ExplorerArgs,
        config: &Config,
        out: &mut W,
    ) -> Result<()> {
        let handler = SearchHandler::new(source, builder);
        let graph = handler.search(&args.address).await?;

        let document = SceneDocument {
            graph: graph.to_data(),
            simulation: args.scene.then_some(&config.simulation),
            link_style: args.scene.then_some(&config.render.link),
        };
        serde_json::to_writer_pretty(&mut *out, &document).map_err(EngineError::from)?;
        writeln!(out)?;
        Ok(())
    }
}
