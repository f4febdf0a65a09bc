use anyhow::Result;

use travel_planner_backend::{init_tracing, llm::LLMFactory, Config};

/// Print the models the configured provider offers
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (config, _) = Config::discover()?;
    let api_key = match config.llm_config.resolve_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("⚠️ {}", e);
            std::process::exit(1);
        }
    };

    let llm = LLMFactory::create_llm(&config.llm_config, api_key)?;

    match llm.list_models().await {
        Ok(models) => {
            println!("✅ Available Models:");
            for model in models {
                println!("- {}: {:?}", model.name, model.supported_generation_methods);
            }
        }
        Err(e) => println!("⚠️ Error fetching model list: {}", e),
    }

    Ok(())
}
