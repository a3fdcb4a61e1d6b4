// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the configuration and the
//   HTTP client, then hand them to the menu loop.

use fakestore_cli::ui::{Shell, TermPrompt};
use fakestore_cli::{init_tracing, ApiClient, Catalog, Config};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Endpoint and timeout come from `FAKESTORE_API_URL` and
    // `FAKESTORE_TIMEOUT_SECS`. See `config::Config::from_env`.
    let config = Config::from_env()?;
    tracing::info!(base_url = config.base_url(), timeout_secs = config.timeout().as_secs(), "starting");
    let api = ApiClient::new(&config)?;

    // Blocks until the user picks "Exit".
    let mut shell = Shell::new(Catalog::new(api, config), TermPrompt, std::io::stdout());
    shell.run()
}
