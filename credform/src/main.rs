use anyhow::{anyhow, Result};
use credform::App;
use credform_session::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(|e| anyhow!(e))?;

    // Optional navigation location, e.g. "?role=agent"
    let location = std::env::args().nth(1);

    // Logging is initialized in App::run()
    App::new(settings, location).run().await?;

    Ok(())
}
