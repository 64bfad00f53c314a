//! Dispatch: one handler per subcommand, each calling the session facade and
//! rendering its structured result. This module owns process exit codes; the
//! library never does.

use super::render;
use super::setup::{Cli, Commands};
use super::styles;
use clap::Parser;
use flyqapp::api::FilterSession;
use flyqapp::commands::CmdResult;
use flyqapp::config::FlyqConfig;
use flyqapp::model::GroupOp;
use flyqapp::schema::{ReferenceData, RuleSchema};
use flyqapp::store::fs::FileStore;
use flyqapp::store::FilterChange;
use std::path::Path;

pub fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", styles::ERROR.apply_to("Error:"), err);
            1
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<i32> {
    let config = FlyqConfig::load()?;
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => FileStore::default_dir()?,
    };
    let reference = load_reference(&data_dir);
    let schema = RuleSchema::for_flight_data(&reference);
    let mut session = FilterSession::open(FileStore::new(data_dir), schema);

    // Naked flyq shows the current filter.
    let command = cli.command.unwrap_or(Commands::Show);

    let result: CmdResult = match command {
        Commands::Show => {
            print!("{}", render::tree(&session.view()));
            println!("{}", render::status(&session.validate()));
            return Ok(0);
        }
        Commands::Rules => {
            print!("{}", render::rules(session.schema()));
            return Ok(0);
        }
        Commands::AddRule { path } => session.add_rule(&path)?,
        Commands::AddGroup { path } => session.add_group(&path)?,
        Commands::And { path } => session.set_operator(&path, GroupOp::And)?,
        Commands::Or { path } => session.set_operator(&path, GroupOp::Or)?,
        Commands::Select { path, rule } => session.select_rule(&path, &rule)?,
        Commands::Set { path, slot, value } => session.set_value(&path, slot, &value)?,
        Commands::Rm { path } => session.delete(&path)?,
        Commands::Clear => session.delete("root")?,
        Commands::Check => session.validate(),
        Commands::Share => {
            let result = session.share()?;
            if let Some(locator) = &result.locator {
                println!("{}", locator);
                eprintln!(
                    "{}",
                    styles::MUTED.apply_to(format!(
                        "append as ?{}=<token> to a review URL",
                        config.param_name
                    ))
                );
            }
            result
        }
        Commands::Load { token } => session.load_locator(&token)?,
        Commands::Save { name, color } => {
            let color = color.as_deref().unwrap_or(&config.default_color);
            session.save_named(&name, color)?
        }
        Commands::Filters => {
            let result = session.list_named()?;
            if !result.filters.is_empty() {
                print!("{}", render::filters(&result.filters));
            }
            result
        }
        Commands::Use { name } => session.use_named(&name)?,
        Commands::Rename { name, new_name } => {
            session.update_named(&name, FilterChange::rename(&new_name))?
        }
        Commands::Recolor { name, color } => {
            session.update_named(&name, FilterChange::default().with_color(&color))?
        }
        Commands::Drop { name } => session.delete_named(&name)?,
    };

    render::messages(&result.messages);
    Ok(if result.has_errors() { 1 } else { 0 })
}

/// Optional host-supplied reference data (`reference.json` in the data dir);
/// falls back to the built-in sample lists.
fn load_reference(data_dir: &Path) -> ReferenceData {
    let path = data_dir.join("reference.json");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return ReferenceData::default();
    };
    match serde_json::from_str(&content) {
        Ok(reference) => reference,
        Err(err) => {
            eprintln!(
                "{}",
                styles::WARNING.apply_to(format!(
                    "ignoring unreadable {}: {}",
                    path.display(),
                    err
                ))
            );
            ReferenceData::default()
        }
    }
}
