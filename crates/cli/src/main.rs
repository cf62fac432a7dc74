use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::load_records;
use pipeline::{SimilarityMatrix, TagExtractor, Vocabulary, DEFAULT_VOCAB_SIZE};
use recommender::{SimilarityModel, DEFAULT_RECOMMENDATIONS};
use std::path::PathBuf;
use std::time::Instant;

/// CineSim - content-based movie recommendation engine
#[derive(Parser)]
#[command(name = "cine-sim")]
#[command(about = "Content-based movie recommender over the TMDB 5000 dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the similarity model from the two TMDB CSV files
    Preprocess {
        /// Path to tmdb_5000_movies.csv
        #[arg(long, default_value = "data/tmdb_5000_movies.csv")]
        movies: PathBuf,

        /// Path to tmdb_5000_credits.csv
        #[arg(long, default_value = "data/tmdb_5000_credits.csv")]
        credits: PathBuf,

        /// Where to write the model artifact
        #[arg(long, default_value = "model.bin")]
        output: PathBuf,

        /// Vocabulary size (top-N tokens by corpus frequency)
        #[arg(long, default_value_t = DEFAULT_VOCAB_SIZE)]
        vocab_size: usize,
    },

    /// Look up recommendations for a title against a built model
    Recommend {
        /// Exact movie title (case-sensitive)
        #[arg(long)]
        title: String,

        /// Path to the model artifact
        #[arg(long, default_value = "model.bin")]
        model: PathBuf,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATIONS)]
        limit: usize,
    },

    /// Search for titles by case-insensitive substring match
    Search {
        /// Text to look for in titles
        #[arg(long)]
        query: String,

        /// Path to the model artifact
        #[arg(long, default_value = "model.bin")]
        model: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preprocess {
            movies,
            credits,
            output,
            vocab_size,
        } => handle_preprocess(&movies, &credits, &output, vocab_size),
        Commands::Recommend {
            title,
            model,
            limit,
        } => handle_recommend(&model, &title, limit),
        Commands::Search { query, model } => handle_search(&model, &query),
    }
}

/// Handle the 'preprocess' command: CSVs in, model artifact out.
fn handle_preprocess(
    movies: &PathBuf,
    credits: &PathBuf,
    output: &PathBuf,
    vocab_size: usize,
) -> Result<()> {
    let start = Instant::now();

    println!("Loading TMDB dataset...");
    let records = load_records(movies, credits).context("Failed to load TMDB dataset")?;
    println!(
        "{} Joined {} movie records in {:?}",
        "✓".green(),
        records.len(),
        start.elapsed()
    );

    let step = Instant::now();
    println!("Extracting tag strings...");
    let tagged = TagExtractor::new()
        .extract_all(&records)
        .context("Feature extraction produced no usable records")?;
    println!(
        "{} Tagged {} movies in {:?}",
        "✓".green(),
        tagged.len(),
        step.elapsed()
    );

    let step = Instant::now();
    println!("Building vocabulary and similarity matrix...");
    let tags: Vec<&str> = tagged.iter().map(|m| m.tags.as_str()).collect();
    let vocab = Vocabulary::build(&tags, vocab_size);
    let matrix = SimilarityMatrix::from_tag_strings(&tags, &vocab);
    println!(
        "{} Computed {}x{} similarity matrix ({} vocabulary tokens) in {:?}",
        "✓".green(),
        matrix.len(),
        matrix.len(),
        vocab.len(),
        step.elapsed()
    );

    let model = SimilarityModel::new(tagged, matrix)?;
    model.save(output).context("Failed to write model artifact")?;
    println!(
        "{} Wrote model to {} (total {:?})",
        "✓".green(),
        output.display(),
        start.elapsed()
    );

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(model_path: &PathBuf, title: &str, limit: usize) -> Result<()> {
    let model = load_model(model_path)?;

    if !model.contains_title(title) {
        return Err(anyhow!(
            "Title '{}' not found in the model (titles are matched exactly; try `cine-sim search`)",
            title
        ));
    }

    let recommendations = model.recommend(title, limit);
    println!(
        "{}",
        format!("Because you liked '{title}':").bold().blue()
    );
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} (id {})",
            (rank + 1).to_string().green(),
            rec.title,
            rec.id
        );
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(model_path: &PathBuf, query: &str) -> Result<()> {
    let model = load_model(model_path)?;
    let query_lower = query.to_lowercase();

    // Exact matches first, then substring matches, each in row order
    let mut matches: Vec<(&str, u32, usize)> = Vec::new();
    for movie in model.movies() {
        let title_lower = movie.title.to_lowercase();
        if title_lower == query_lower {
            matches.push((&movie.title, movie.id, 0));
        } else if title_lower.contains(&query_lower) {
            matches.push((&movie.title, movie.id, 1));
        }
    }
    matches.sort_by_key(|&(_, _, rank)| rank);

    println!(
        "{}",
        format!("Search results for '{query}':").bold().blue()
    );
    for (title, id, _) in matches.iter().take(20) {
        println!("{id}: {title}");
    }
    if matches.is_empty() {
        println!("(no matches)");
    }
    Ok(())
}

fn load_model(path: &PathBuf) -> Result<SimilarityModel> {
    let start = Instant::now();
    let model = SimilarityModel::load(path).with_context(|| {
        format!(
            "Failed to load model '{}'. Run `cine-sim preprocess` first.",
            path.display()
        )
    })?;
    println!(
        "{} Loaded model with {} movies in {:?}",
        "✓".green(),
        model.len(),
        start.elapsed()
    );
    Ok(model)
}
