use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::arena::OrbitArena;
use crate::builder::MapBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::display::ToTermTree;
use crate::transfer::shortest_transfers;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Orbits { map_file }) => orbits(map_file),
        Some(Commands::Transfers {
            map_file,
            from,
            to,
        }) => transfers(map_file, from.as_deref(), to.as_deref()),
        Some(Commands::Tree { map_file }) => tree(map_file),
        Some(Commands::Leaves { map_file }) => leaves(map_file),
        Some(Commands::Stats { map_file }) => stats(map_file),
        Some(Commands::Config { command }) => config(command),
        None => Ok(()),
    }
}

fn build_map(map_file: &Path) -> CliResult<OrbitArena> {
    let arena = MapBuilder::new().build_from_file(map_file)?;
    debug!("built orbit map with {} bodies", arena.len());
    Ok(arena)
}

#[instrument]
fn orbits(map_file: &Path) -> CliResult<()> {
    let arena = build_map(map_file)?;
    output::info(&arena.total_orbits());
    Ok(())
}

#[instrument]
fn transfers(map_file: &Path, from: Option<&str>, to: Option<&str>) -> CliResult<()> {
    let settings = Settings::load()?;
    let from = from.unwrap_or(&settings.you);
    let to = to.unwrap_or(&settings.san);
    debug!("transfer endpoints: {} -> {}", from, to);

    let arena = build_map(map_file)?;
    let path = shortest_transfers(&arena, from, to)?;

    output::result("transfers", &path.len());
    let route = path
        .iter()
        .filter_map(|&idx| arena.get_node(idx))
        .map(|node| node.data.id.as_str())
        .join(" -> ");
    if !route.is_empty() {
        output::detail(&route);
    }
    Ok(())
}

#[instrument]
fn tree(map_file: &Path) -> CliResult<()> {
    let arena = build_map(map_file)?;
    output::info(&arena.to_tree_string()?);
    Ok(())
}

#[instrument]
fn leaves(map_file: &Path) -> CliResult<()> {
    let arena = build_map(map_file)?;
    let ids = arena
        .leaves()
        .into_iter()
        .filter_map(|idx| arena.get_node(idx))
        .map(|node| node.data.id.as_str())
        .sorted();
    for id in ids {
        output::info(id);
    }
    Ok(())
}

#[instrument]
fn stats(map_file: &Path) -> CliResult<()> {
    let arena = build_map(map_file)?;
    let root_idx = arena.root()?;
    let root_id = arena
        .get_node(root_idx)
        .map(|n| n.data.id.as_str())
        .unwrap_or_default();

    output::header(&format!("Orbit map: {}", map_file.display()));
    output::result("bodies", &arena.len());
    output::result("root", &root_id);
    output::result("leaves", &arena.leaves().len());
    output::result("max depth", &arena.max_depth());
    output::result("total orbits", &arena.total_orbits());
    Ok(())
}

#[instrument]
fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&format!("you = {:?}", settings.you));
            output::info(&format!("san = {:?}", settings.san));
        }
        ConfigCommands::Init => {
            let path = Settings::write_template()?;
            output::result("created", &path.display());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("cannot determine config directory"),
        },
    }
    Ok(())
}
