//! Translation command

use anyhow::Result;

pub fn run(texts: &[String]) -> Result<()> {
    let config = super::load_config()?;
    let manager = super::translation_manager(&config);
    for translated in manager.translate_many(texts) {
        println!("{}", translated);
    }
    Ok(())
}
