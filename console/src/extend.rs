use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use genebrowse::prelude::*;
use log::info;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct ExtendArgs {
    #[arg(
        long = "name-map",
        help = "Path to the locus/transcript name map of the target version"
    )]
    name_map: PathBuf,

    #[arg(long, help = "Path to the target version's GFF3 gene models")]
    gff: PathBuf,

    #[arg(long, help = "Path to the target version's annotation info file")]
    annotation: PathBuf,

    #[arg(
        long = "from",
        default_value = "Wm82v4",
        help = "Assembly version whose ID column keys the join"
    )]
    source: String,

    #[arg(
        long = "to",
        default_value = "Wm82v6",
        help = "Assembly version whose columns are appended"
    )]
    target: String,

    #[arg(help = "Path to the gene coordinate table to extend")]
    input: PathBuf,

    #[arg(
        default_value = "extended_gold_standard_list.tsv",
        help = "Path for the extended table"
    )]
    output: PathBuf,
}

impl ExtendArgs {
    pub fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        println!(
            "Extending {} with {} columns mapped from {}",
            style(self.input.display()).green(),
            style(&self.target).green(),
            style(&self.source).green()
        );

        let open = |path: &PathBuf| {
            File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))
        };
        let extender = TableExtender::new(&self.source, &self.target)
            .with_name_map(open(&self.name_map)?)?
            .with_gene_models(open(&self.gff)?)?
            .with_annotation_info(open(&self.annotation)?)?;

        let table = TableReader::from_path(&self.input)?.finish()?;
        info!("loaded {} genes from {}", table.len(), self.input.display());

        let extended = extender.extend(&table)?;

        let mut writer = TableWriter::from_path(&self.output)?;
        writer.write_table(&extended)?;
        writer.finish()?;
        println!(
            "Extended table written to {}",
            style(self.output.display()).green()
        );
        Ok(())
    }
}
