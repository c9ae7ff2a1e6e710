use anyhow::Result;

use super::load_config;
use crate::backend::BackendClient;
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::ui::Spinner;

pub async fn run_polish(file: Option<&str>, options: &ResolveOptions) -> Result<()> {
    let config = load_config(options)?;
    let message = InputReader::read_message(file)?;
    let client = BackendClient::new(config.endpoint)?;

    let reply = {
        let _spinner = Spinner::for_request("Polishing...");
        client.polish(&message).await?
    };

    println!("{reply}");
    Ok(())
}
