use crate::config::types::Config;
use crate::display;
use crate::updater;

/// Upgrade the underlying tool packages.
pub fn handle_update(config: &Config) -> crate::Result<()> {
    display::banner();
    updater::update_packages(&config.update);
    Ok(())
}
