mod cli;
mod stats;

use std::path::Path;

use clap::Parser;
use cli::{CatalogArgs, CliArgs, Command};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use portfolio_core::catalog::parse_projects;
use portfolio_core::{Catalog, Project};
use stats::{CatalogStats, Selection};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match &args.command {
        Command::Check(catalog) => check(catalog),
        Command::Stats { catalog, json } => {
            let stats = CatalogStats::build(&load(catalog)?);
            if *json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                stats.print();
            }
            Ok(())
        }
        Command::Filter {
            catalog,
            category,
            tag,
            json,
        } => {
            let selection = match (category, tag) {
                (Some(category), _) => Selection::Category(category),
                (None, Some(tag)) => Selection::Tag(tag),
                (None, None) => return Err(eyre!("pass --category or --tag")),
            };
            let catalog = load(catalog)?;
            let titles: Vec<&str> = stats::filtered(&catalog, &selection)
                .into_iter()
                .map(|project| project.title.as_str())
                .collect();

            if *json {
                println!("{}", serde_json::to_string_pretty(&titles)?);
            } else if titles.is_empty() {
                println!("{}", portfolio_core::view::NO_PROJECTS_MESSAGE);
            } else {
                for title in titles {
                    println!("{title}");
                }
            }
            Ok(())
        }
    }
}

fn check(args: &CatalogArgs) -> Result<()> {
    let catalog = load(args)?;
    let issues = stats::issues(&catalog);
    for issue in &issues {
        log::warn!(
            "record {} ({:?}) has an empty {}",
            issue.index,
            issue.title,
            issue.field
        );
    }

    println!(
        "{}: {} projects ({} featured, {} in gallery), {} warnings",
        args.file.display(),
        catalog.len(),
        catalog.featured().len(),
        catalog.standard().len(),
        issues.len()
    );
    Ok(())
}

fn load(args: &CatalogArgs) -> Result<Catalog> {
    let catalog = Catalog::new(read_projects(&args.file)?);
    match &args.featured {
        Some(path) => Ok(catalog.with_featured(read_projects(path)?)),
        None => Ok(catalog),
    }
}

fn read_projects(path: &Path) -> Result<Vec<Project>> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("could not read {}", path.display()))?;
    let projects =
        parse_projects(&text).wrap_err_with(|| format!("invalid catalog {}", path.display()))?;
    log::debug!("{}: {} records", path.display(), projects.len());
    Ok(projects)
}
