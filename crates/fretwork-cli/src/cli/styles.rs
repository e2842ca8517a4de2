//! Styles command - list pattern families and their generators.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fretwork::Family;

#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Only list this family
    pub family: Option<Family>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FamilyListing {
    family: &'static str,
    description: &'static str,
    default_style: &'static str,
    styles: Vec<StyleListing>,
}

#[derive(Serialize)]
struct StyleListing {
    name: &'static str,
    description: &'static str,
}

fn listing(families: &[Family]) -> Vec<FamilyListing> {
    families
        .iter()
        .map(|family| FamilyListing {
            family: family.name(),
            description: family.description(),
            default_style: family.default_style(),
            styles: family
                .styles()
                .iter()
                .map(|entry| StyleListing { name: entry.name, description: entry.description })
                .collect(),
        })
        .collect()
}

pub fn cmd_styles(args: &StylesArgs) -> Result<()> {
    let families: Vec<Family> = match args.family {
        Some(family) => vec![family],
        None => Family::all().to_vec(),
    };
    let listing = listing(&families);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for family in &listing {
        println!("{} - {}", family.family, family.description);
        for style in &family.styles {
            let marker = if style.name == family.default_style { "*" } else { " " };
            println!("  {marker} {:<14} {}", style.name, style.description);
        }
        println!();
    }
    println!("* = family default");
    Ok(())
}
