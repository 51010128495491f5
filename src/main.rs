//! setoran-config: inspect and validate Setoran Harian API configuration
//!
//! Loads the service settings from defaults, an optional `.env` file, and
//! process environment variables, and reports the effective values.

use anyhow::Result;

fn main() -> Result<()> {
    setoran_config::cli::run()
}
