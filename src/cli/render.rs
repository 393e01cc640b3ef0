//! Render command - fetch a path, normalize names, write the formatted text.

use tracing::debug;

use crate::cli::{output, Cli};
use crate::core::domain::normalize_all;
use crate::core::format::Format;
use crate::core::sink::Sink;
use crate::core::store::{fetch_all, ParameterStore, Query, SsmStore};
use crate::error::Result;

/// Run the full pipeline for the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let query = Query::from(&cli);
    let store = open_store(&cli)?;
    let sink = Sink::from_path(cli.file);

    let count = run(store.as_ref(), &query, cli.output, &sink)?;

    if let Sink::File(path) = &sink {
        output::success(&format!(
            "wrote {} variables to {}",
            count,
            output::path(&path.display().to_string())
        ));
    }
    Ok(())
}

impl From<&Cli> for Query {
    fn from(cli: &Cli) -> Self {
        Query::new(cli.path.clone().unwrap_or_default())
            .recursive(cli.recursive)
            .decrypt(!cli.no_decrypt)
    }
}

/// Fetch, normalize, render, and write. Returns the number of variables.
///
/// Nothing is written unless every page was fetched and every name
/// normalized.
pub fn run(store: &dyn ParameterStore, query: &Query, format: Format, sink: &Sink) -> Result<usize> {
    let params = fetch_all(store, query)?;
    let vars = normalize_all(params)?;
    let text = format.render(&vars);

    debug!(
        variables = vars.len(),
        format = %format,
        bytes = text.len(),
        "rendered"
    );

    sink.write(&text)?;
    Ok(vars.len())
}

#[cfg(feature = "test-store")]
fn open_store(cli: &Cli) -> Result<Box<dyn ParameterStore>> {
    use crate::core::constants::FIXTURE_ENV;
    use crate::core::store::FixtureStore;

    match std::env::var_os(FIXTURE_ENV) {
        Some(path) => Ok(Box::new(FixtureStore::load(path)?)),
        None => Ok(Box::new(SsmStore::connect(cli.region.clone())?)),
    }
}

#[cfg(not(feature = "test-store"))]
fn open_store(cli: &Cli) -> Result<Box<dyn ParameterStore>> {
    Ok(Box::new(SsmStore::connect(cli.region.clone())?))
}
