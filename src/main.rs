use anyhow::bail;
use clap::Parser;
use groups::utils::{self, Config};
use groups::Limits;

const BOLD_ANSI_CODE: &str = "\x1b[1m";
const RESET_ANSI_CODE: &str = "\x1b[0m";

/// Enumerate a finite group from its standard generators.
#[derive(Parser, Debug)]
#[command(name = "groups", version)]
struct Cli {
    /// The group, e.g. `S5`, `A4`, `D6`, `Z12`, `U8` or `Z2 x S3`, optionally followed by `@N` to
    /// stop after N elements. Prompted for if omitted.
    group: Option<String>,

    /// Stop construction once more than this many elements have been found
    #[arg(long, value_name = "N")]
    max_elements: Option<usize>,

    /// Also check associativity, which takes time cubic in the order of the group
    #[arg(long)]
    check_associativity: bool,

    /// Print the group as JSON
    #[arg(long, conflicts_with = "summary")]
    json: bool,

    /// Only print the order, identity and commutativity of the group
    #[arg(short, long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    utils::init_logging()?;
    let cli = Cli::parse();

    let mut config = match &cli.group {
        Some(spec) => Config::try_from(spec.as_str())?,
        None => utils::query_config()?,
    };
    if let Some(n) = cli.max_elements {
        config.limits = Limits::bounded(n);
    }

    let name = config.family.to_string();
    let group = utils::construct(config)?;
    tracing::info!("{name} has order {}", group.order());

    if cli.check_associativity {
        match group.associativity_counterexample() {
            None => tracing::info!("{name} is associative"),
            Some((a, b, c)) => {
                bail!("Composition is not associative: ({a} * {b}) * {c} != {a} * ({b} * {c})")
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else if cli.summary {
        println!(
            "{BOLD_ANSI_CODE}{name}{RESET_ANSI_CODE}: order {}, {}, identity {}",
            group.order(),
            if group.is_abelian() {
                "abelian"
            } else {
                "non-abelian"
            },
            group.identity()
        );
    } else {
        println!("{BOLD_ANSI_CODE}{name}{RESET_ANSI_CODE} = {group}");
    }
    Ok(())
}
