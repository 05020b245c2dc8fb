use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use svo_lexicon::Lexicon;
use svo_protocol::LexiconData;
use rkyv::ser::{serializers::AllocSerializer, Serializer};

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to an rkyv archive")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    compile(&cli.input, &cli.output)
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    println!("Reading JSON from {:?}...", input);
    let input_data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let data: LexiconData =
        serde_json::from_str(&input_data).with_context(|| format!("parsing {}", input.display()))?;

    // Reject dangling ids and hypernym cycles before anything is written
    let lexicon = Lexicon::from_data(data.clone()).context("lexicon failed validation")?;
    println!(
        "Compiling lexicon version {} with {} senses and {} terms...",
        lexicon.version(),
        lexicon.sense_count(),
        lexicon.term_count()
    );

    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(&data)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {e:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    println!("Wrote {} bytes to {:?}", bytes.len(), output);
    Ok(())
}
