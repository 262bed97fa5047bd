//! Orrery: star system explorer. Runs the system_explorer app.

use bevy::prelude::*;
use system_explorer::config;
use system_explorer::prelude::SystemExplorerBuilder;

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    let config = config::explorer_config();

    let catalogue = match config.catalogue() {
        Ok(catalogue) => catalogue,
        Err(err) => {
            eprintln!("orrery: {err}");
            return AppExit::error();
        }
    };

    SystemExplorerBuilder::new()
        .catalogue(catalogue)
        .settings(config.settings)
        .immersive(config.immersive)
        .build()
        .run()
}
