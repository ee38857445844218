use clap::{Parser, Subcommand};
use roast_api::{store, utils::names, CompletionClient, Config, Generation};

#[derive(Parser, Debug)]
#[command(name = "roastctl", about = "CLI for the roast generation API", version)]
struct Cli {
    /// Override OPENROUTER_API_KEY
    #[arg(global = true, long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a roast directly against OpenRouter
    Generate {
        /// Who to roast
        #[arg(long)]
        name: String,
        /// light, medium or extra_spicy
        #[arg(long, default_value = "medium")]
        category: String,
    },
    /// Print the "Surprise Me" name list
    Names,
    /// Show stored roasts
    History {
        /// Number of most recent roasts to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Output raw JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show stored status checks
    Status {
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    match cli.command {
        Commands::Names => {
            for name in names::RANDOM_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Generate { name, category } => {
            if name.trim().is_empty() {
                eprintln!("Name is required");
                std::process::exit(2);
            }
            let conf = Config::new()?;
            let api_key = cli.api_key.or(conf.openrouter_api_key);
            let client = CompletionClient::new(conf.openrouter_base_url, api_key, conf.openrouter_timeout)?;
            match client.generate(&name, &category).await {
                Ok(Generation::Live(text)) => {
                    println!("{}", text);
                    Ok(())
                }
                Ok(Generation::Fallback { text, reason }) => {
                    eprintln!("[fallback] {}", reason);
                    println!("{}", text);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::History { limit, json } => {
            let conf = Config::new()?;
            let store = store::connect(&conf.store_url, &conf.db_name).await?;
            let roasts = store.recent_roasts(limit).await?;
            if roasts.is_empty() {
                eprintln!("No roasts stored in '{}'", conf.db_name);
            }
            for roast in roasts {
                if json {
                    println!("{}", serde_json::to_string(&roast)?);
                } else {
                    println!("{} [{}] {}: {}", roast.timestamp.to_rfc3339(), roast.category, roast.name, roast.roast);
                }
            }
            Ok(())
        }
        Commands::Status { limit } => {
            let conf = Config::new()?;
            let store = store::connect(&conf.store_url, &conf.db_name).await?;
            for check in store.list_status(limit).await? {
                println!("{} {} {}", check.timestamp.to_rfc3339(), check.id, check.client_name);
            }
            Ok(())
        }
    }
}
