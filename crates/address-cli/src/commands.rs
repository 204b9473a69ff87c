use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::info_span;

use address_cli::input::select_input;
use address_cli::pipeline::{read_addresses, validate_addresses};
use address_cli::report::print_results;
use address_validate::{AddressValidator, Credentials, SmartyProvider};

use crate::cli::Cli;

pub fn run_verify(cli: &Cli) -> Result<()> {
    let span = info_span!("verify");
    let _guard = span.enter();

    let source = select_input(cli.filename.as_deref(), !io::stdin().is_terminal())?;

    // Credentials are checked before any input is read or request is sent.
    let credentials = Credentials::new(cli.auth_id.clone(), cli.auth_token.clone())?;
    let provider = SmartyProvider::new(credentials)?.with_base_url(&cli.api_url)?;
    let validator = AddressValidator::new(provider);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let results = runtime.block_on(async {
        let addresses = read_addresses(source).await?;
        validate_addresses(&validator, &addresses).await
    })?;

    let stdout = io::stdout();
    print_results(&mut stdout.lock(), &results).context("write results")?;
    Ok(())
}
