//! Image generation command

use anyhow::{Context, Result};
use loom_gen::{create_provider, ProviderStatus};
use std::path::Path;

pub fn run(prompt_file: &Path, provider_name: &str, name: Option<&str>, output: &Path) -> Result<()> {
    let prompt = std::fs::read_to_string(prompt_file)
        .with_context(|| format!("Failed to read prompt file {}", prompt_file.display()))?;
    let prompt = prompt.trim();
    if prompt.is_empty() {
        anyhow::bail!("Prompt file {} is empty", prompt_file.display());
    }

    let config = super::load_config()?;
    let provider = create_provider(provider_name, &config)?;
    match provider.health_check()? {
        ProviderStatus::Available => {}
        ProviderStatus::NoApiKey => anyhow::bail!(
            "Provider '{}' has no API key. Set LOOM_{}_API_KEY or add it to .loom/config.toml",
            provider_name,
            provider_name.to_uppercase()
        ),
        ProviderStatus::Unavailable(reason) => {
            anyhow::bail!("Provider '{}' unavailable: {}", provider_name, reason)
        }
    }

    let name = output_name(prompt_file, name);
    let result = provider.generate(prompt, &name, output)?;
    println!("Generated {} in {:.1}s", result.output_path, result.duration_secs);
    if let Some(hash) = &result.content_hash {
        println!("  hash: {}", hash);
    }
    Ok(())
}

fn output_name(prompt_file: &Path, name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| {
            prompt_file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "image".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name() {
        let file = Path::new("prompts/hero_portrait.txt");
        assert_eq!(output_name(file, None), "hero_portrait");
        assert_eq!(output_name(file, Some("  ")), "hero_portrait");
        assert_eq!(output_name(file, Some("cover")), "cover");
    }
}
