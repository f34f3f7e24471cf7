use std::convert::{TryFrom, TryInto};

use algebra::{Family, StandardElement};
use anyhow::{anyhow, Context};

use crate::group::{Group, Limits};

/// A config object specifies which standard group should be constructed, and how much work the
/// construction may do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub family: Family,
    pub limits: Limits,
}

impl From<Family> for Config {
    fn from(family: Family) -> Self {
        Self {
            family,
            limits: Limits::UNBOUNDED,
        }
    }
}

impl TryFrom<&str> for Config {
    type Error = anyhow::Error;

    /// Parses a string of the form `name` or `name@max_elements`, where `name` is a group name as
    /// accepted by [`algebra::parser::parse_family`].
    fn try_from(spec: &str) -> Result<Self, Self::Error> {
        let mut args = spec.split('@');
        let name = args.next().unwrap_or_default();
        let limits = match args.next() {
            Some(max) => Limits::bounded(
                max.trim()
                    .parse()
                    .with_context(|| format!("Invalid element bound '{max}'"))?,
            ),
            None => Limits::UNBOUNDED,
        };
        if let Some(extra) = args.next() {
            return Err(anyhow!("Unexpected '@{extra}' in {spec}"));
        }

        Ok(Self {
            family: name.parse()?,
            limits,
        })
    }
}

impl TryFrom<(&str, Limits)> for Config {
    type Error = anyhow::Error;

    fn try_from(spec: (&str, Limits)) -> Result<Self, Self::Error> {
        Ok(Self {
            family: spec.0.parse()?,
            limits: spec.1,
        })
    }
}

/// This constructs a standard group.
///
/// # Arguments
///  - `config`: Anything that implements [`TryInto<Config>`] (with appropriate error bounds). In
///    practice, we can supply
///     - A [`Config`] or a [`Family`];
///     - `(name, limits)`, where `name` is a group name such as `"D6"` or `"Z2 x S3"` and
///       `limits` is a [`Limits`];
///     - a single `&str` of the form `name@max_elements` or `name`.
pub fn construct<T, E>(config: T) -> anyhow::Result<Group<StandardElement>>
where
    anyhow::Error: From<E>,
    T: TryInto<Config, Error = E>,
{
    let Config { family, limits } = config.try_into()?;

    let group = Group::construct_with(family.generators(), &limits)
        .with_context(|| format!("Failed to construct {family}"))?;

    if let Some(expected) = family.order() {
        if expected != group.order() as u64 {
            tracing::warn!(
                "{family} should have order {expected}, but {} elements were found",
                group.order()
            );
        }
    }
    Ok(group)
}

/// Asks for a group on stderr, in the format accepted by [`Config::try_from`]. If no bound is
/// given in the name, asks for one separately.
pub fn query_config() -> anyhow::Result<Config> {
    let mut config = query::with_default("Group", "S4", |spec: String| {
        Config::try_from(spec.as_str()).map_err(|e| format!("{e:#}"))
    })?;

    if config.limits.max_elements.is_none() {
        config.limits.max_elements =
            query::optional("Maximum number of elements (empty for none)", |n: usize| {
                if n > 0 {
                    Ok(n)
                } else {
                    Err("the bound must be positive".to_string())
                }
            })?;
    }
    Ok(config)
}

/// Logs to stderr. The default level is `info`, and can be overridden with `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
