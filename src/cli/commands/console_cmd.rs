//! cli::commands::console_cmd
//!
//! The console command: resolve settings, load the ABI, connect the
//! client, and hand control to the interactive loop.

use anyhow::{Context as _, Result};

use crate::cli::args::ConsoleArgs;
use crate::client::HttpNodeClient;
use crate::console::Console;
use crate::core::abi::Abi;
use crate::core::config::Config;
use crate::core::types::{ChannelId, SigningKey};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Run the console command.
///
/// Settings resolve as defaults < config file < flags. Everything here
/// runs before the loop starts, so failures are startup errors; once the
/// loop is running, nothing the user types can get back out of it except
/// end of input.
pub fn console(args: &ConsoleArgs, verbosity: Verbosity, interactive: bool) -> Result<()> {
    let config = Config::load()?;

    let host = args
        .host
        .clone()
        .unwrap_or_else(|| config.host().to_string());

    let channel = match args.channel.as_deref().or(config.channel.as_deref()) {
        Some(raw) => ChannelId::new(raw)?,
        None => ChannelId::default(),
    };

    let abi = Abi::load(&args.abi)?;

    let key = resolve_key(args, &config, interactive)?;

    output::debug(format!("node host: {host}"), verbosity);
    output::debug(format!("channel: {channel}"), verbosity);

    let mut client = HttpNodeClient::new(host, channel);
    if let Some(key) = key {
        client = client.with_signing_key(key);
    }
    if let Some(account) = args.on_behalf_of.clone() {
        client = client.with_on_behalf_of(account);
    }

    let console = Console::new(abi, Box::new(client));
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(console.run())?;
    Ok(())
}

/// Signing key from `--key-file`, the config file, or a masked prompt.
///
/// Transactions can only be signed with a key, but read-only use is fine
/// without one, so no key is not an error.
fn resolve_key(
    args: &ConsoleArgs,
    config: &Config,
    interactive: bool,
) -> Result<Option<SigningKey>> {
    if args.key_prompt {
        let entered = prompts::password("signing key (hex)", interactive)?;
        return Ok(Some(SigningKey::new(entered)?));
    }
    if let Some(path) = args.key_file.as_deref().or(config.key_file.as_deref()) {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read key file: {}", path.display()))?;
        return Ok(Some(SigningKey::new(raw)?));
    }
    Ok(None)
}
