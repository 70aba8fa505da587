use anyhow::Result;
use tracing::info;

use crate::cli::last_prompt_store;
use crate::config::Config;

pub fn run(clear: bool, config_path: Option<String>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let store = last_prompt_store(&config);

    if clear {
        store.clear()?;
        info!("Cleared {}", store.path().display());
        println!("Last prompt cleared.");
        return Ok(());
    }

    match store.load()? {
        Some(prompt) => println!("{}", prompt),
        None => println!("No prompt has been generated yet."),
    }
    Ok(())
}
