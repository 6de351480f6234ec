use crate::reports;
use clap::Args;
use keyload::geometry::KeyboardGrid;
use keyload::layouts::{KnownLayout, LayoutDefinition};
use keyload::KlResult;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Draw the base layer of one layout.
    #[arg(short, long)]
    pub show: Option<String>,
}

pub fn run(args: LayoutsArgs) -> KlResult<()> {
    if let Some(name) = &args.show {
        let def = LayoutDefinition::from_name(name)?;
        reports::print_layout_grid(&def, KeyboardGrid::standard());
        return Ok(());
    }

    let defs: Vec<LayoutDefinition> = KnownLayout::iter().map(LayoutDefinition::new).collect();
    reports::print_catalog(&defs);
    Ok(())
}
