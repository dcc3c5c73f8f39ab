use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use clinorm_cli::batch::{BatchOptions, BatchSummary, normalize_csv};
use clinorm_cli::interactive::run_interactive as prompt_loop;
use clinorm_normalization::{
    TracingSink, WeightOptions, parse_height_to_us, parse_weight_to_pounds_with,
};

use crate::cli::{BatchArgs, ConvertArgs};
use crate::summary::print_units;
use crate::types::ConvertOutput;

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    if args.weight.is_none() && args.height.is_none() {
        bail!("nothing to convert: pass --weight and/or --height");
    }
    let options = WeightOptions::new().with_high_weight_threshold(args.max_weight);

    let weight_lbs = args
        .weight
        .as_deref()
        .map(|text| parse_weight_to_pounds_with(text, &options, &TracingSink))
        .transpose()
        .context("weight could not be normalized")?;
    let height = args
        .height
        .as_deref()
        .map(parse_height_to_us)
        .transpose()
        .context("height could not be normalized")?;

    let output = ConvertOutput {
        weight_lbs,
        height_display: height.map(|height| height.to_string()),
        height,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &output).context("serialize result")?;
        writeln!(out)?;
    } else {
        if let Some(pounds) = output.weight_lbs {
            writeln!(out, "WEIGHT: {pounds:.2} lbs")?;
        }
        if let Some(display) = &output.height_display {
            writeln!(out, "HEIGHT: {display}")?;
        }
    }
    Ok(())
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchSummary> {
    let options = BatchOptions {
        weight_column: (!args.no_weight).then(|| args.weight_column.clone()),
        height_column: (!args.no_height).then(|| args.height_column.clone()),
        weight: WeightOptions::new().with_high_weight_threshold(args.max_weight),
    };
    let input = File::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let input = BufReader::new(input);
    info!(input = %args.input.display(), "normalizing CSV");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            normalize_csv(input, BufWriter::new(file), &options)
        }
        None => normalize_csv(input, io::stdout().lock(), &options),
    }
}

pub fn run_interactive() -> Result<()> {
    prompt_loop(io::stdin().lock(), io::stdout().lock())
}

pub fn run_units() -> Result<()> {
    print_units();
    Ok(())
}
