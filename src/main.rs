use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use jpv_inflect::{Formality, Paradigm, VerbClass};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Conjugation class of the verbs, one of godan, ichidan or irregular.
    #[arg(long, short, default_value = "godan")]
    class: VerbClass,
    /// Only print formal forms. Otherwise informal forms and voices are
    /// printed.
    #[arg(long)]
    formal: bool,
    /// Print each paradigm as JSON.
    #[arg(long)]
    json: bool,
    /// Verbs in their dictionary form to inflect.
    #[arg(name = "verbs", required = true)]
    verbs: Vec<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    for verb in &args.verbs {
        let paradigm = jpv_inflect::generate(verb, args.class)
            .with_context(|| anyhow!("Inflecting `{verb}` as {}", args.class))?;

        tracing::debug!(verb = verb.as_str(), slots = paradigm.iter().count(), "generated");

        if args.json {
            serde_json::to_writer_pretty(&mut o, &paradigm)?;
            writeln!(o)?;
            continue;
        }

        print_paradigm(&mut o, verb, &paradigm, args.formal)?;
    }

    o.flush()?;
    Ok(())
}

fn print_paradigm<O>(o: &mut O, verb: &str, paradigm: &Paradigm, formal: bool) -> Result<()>
where
    O: ?Sized + Write,
{
    let p = "  ";

    writeln!(o, "# {verb}")?;

    for (slot, forms) in paradigm.iter() {
        let is_formal = slot.formality() == Some(Formality::Formal);

        if formal != is_formal {
            continue;
        }

        writeln!(o, "{p}{slot}:")?;

        for form in forms {
            writeln!(o, "{p}- {form}")?;
        }
    }

    Ok(())
}
