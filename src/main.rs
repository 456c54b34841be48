use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use textmod::config::Config;
use textmod::output::terminal;
use textmod::toxicity::perspective::PerspectiveScorer;
use textmod::toxicity::traits::Attribute;
use textmod::{SentimentOptions, TextModerate};

/// textmod: blacklist filtering and sentiment scoring for short text.
#[derive(Parser)]
#[command(name = "textmod", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether a text contains blacklisted words
    Check {
        text: String,
    },

    /// Mask blacklisted words in a text
    Clean {
        text: String,
    },

    /// Score the sentiment of a text
    Sentiment {
        text: String,

        /// Language code (default: TEXTMOD_LANGUAGE, then "en")
        #[arg(long)]
        language: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a text with the Perspective API (needs PERSPECTIVE_API_KEY)
    Toxicity {
        text: String,

        /// Attributes to request, e.g. --attribute insult (default: toxicity)
        #[arg(long = "attribute")]
        attributes: Vec<String>,

        /// Language hints, e.g. --language fr (default: auto-detect)
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Print the provider's raw response
        #[arg(long)]
        json: bool,
    },

    /// List registered sentiment languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textmod=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let moderate = TextModerate::new(config.moderate_options())?;

    match cli.command {
        Commands::Check { text } => {
            let profane = moderate.is_profane(&text);
            terminal::display_profanity_verdict(&text, profane);
            if profane {
                std::process::exit(1);
            }
        }

        Commands::Clean { text } => {
            println!("{}", moderate.clean(&text));
        }

        Commands::Sentiment {
            text,
            language,
            json,
        } => {
            let options = SentimentOptions {
                language,
                extras: None,
            };
            let result = moderate.analyze_sentiment(&text, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let language = options
                    .language
                    .or_else(|| config.language.clone())
                    .unwrap_or_else(|| textmod::sentiment::engine::DEFAULT_LANGUAGE.to_string());
                terminal::display_sentiment(&result, &language);
            }
        }

        Commands::Toxicity {
            text,
            attributes,
            languages,
            json,
        } => {
            config.require_perspective()?;

            let attributes = attributes
                .iter()
                .map(|a| a.parse::<Attribute>())
                .collect::<Result<Vec<_>, _>>()?;

            info!(attributes = attributes.len(), "Using Perspective API toxicity scorer");
            let scorer = PerspectiveScorer::new(config.perspective_api_key.clone())
                .with_endpoint(&config.perspective_url)
                .with_attributes(attributes)
                .with_languages(languages);

            let result = moderate.analyze_toxicity_with(&scorer, &text).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result.raw)?);
            } else {
                terminal::display_toxicity(&result);
            }
        }

        Commands::Languages => {
            for code in moderate.languages() {
                println!("{code}");
            }
        }
    }

    Ok(())
}
