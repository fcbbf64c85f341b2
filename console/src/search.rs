use std::path::PathBuf;

use clap::Args;
use console::style;
use genebrowse::prelude::*;
use log::info;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct SearchArgs {
    #[arg(help = "Assembly version prefix used in column names (e.g. Wm82v2)")]
    genome: String,

    #[arg(help = "Chromosome number to search in")]
    chromosome: i64,

    #[arg(help = "Start base pair of the queried interval")]
    start: u64,

    #[arg(help = "End base pair of the queried interval")]
    end: u64,

    #[arg(help = "Path to the gene coordinate table")]
    input: PathBuf,

    #[arg(
        default_value = "SearchResults.tsv",
        help = "Path for the result table"
    )]
    output: PathBuf,
}

impl SearchArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let query =
            RegionQuery::new(&self.genome, self.chromosome, self.start, self.end);
        println!(
            "Searching for genes in {} on chromosome {}, base pairs {} to {}",
            style(query.assembly()).green(),
            style(query.chromosome()).green(),
            style(query.start()).green(),
            style(query.end()).green()
        );

        let table = TableReader::from_path(&self.input)?.finish()?;
        info!("loaded {} genes from {}", table.len(), self.input.display());

        let result = query_region(&table, &query)?;
        println!(
            "{} genes overlap the queried interval",
            style(result.len()).green()
        );

        let mut writer = TableWriter::from_path(&self.output)?;
        writer.write_table(&result)?;
        writer.finish()?;
        info!("results written to {}", self.output.display());
        Ok(())
    }
}
