//! Thin terminal front end for the torii resolution core.
//!
//! Owns display state only: every resolution step is an explicit call into
//! `torii-core`, mirroring how a richer UI would drive the pipeline.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use torii_api::{AniListClient, HeadProbe, JikanClient, MetadataService, TitleLookup};
use torii_core::{alias, relations, suggest, AppConfig, CoreError, EpisodeResolver, MirrorSet};

#[derive(Parser)]
#[command(name = "torii", version, about = "Browse anime metadata and resolve episode streams")]
struct Cli {
    /// Use a specific config file instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog by title.
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show a title's details: episodes, sequel, similar titles.
    Detail { id: u64 },
    /// List the catalog's genres.
    Genres,
    /// Resolve a stream URL for an episode.
    Play {
        /// Episode ordinal (1-based).
        episode: u32,
        /// Resolve aliases from the catalog entry with this id.
        #[arg(long)]
        id: Option<u64>,
        /// Resolve aliases from a free-text title via the secondary provider.
        #[arg(long, conflicts_with = "id")]
        title: Option<String>,
        /// Hand the resolved URL to the system player.
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("TORII_LOG").unwrap_or_else(|_| "torii=info".into()))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .build()
        .map_err(|e| CoreError::Config(format!("HTTP client: {e}")))?;

    let jikan = JikanClient::with_client(config.providers.jikan_base_url.as_str(), http.clone());
    let anilist = AniListClient::with_client(config.providers.anilist_url.as_str(), http.clone());
    let probe = HeadProbe::with_client(http);
    let mirrors = MirrorSet::new(config.mirrors.hosts.clone());

    match cli.command {
        Command::Search { query, limit } => search(&jikan, &query, limit).await,
        Command::Detail { id } => detail(&jikan, &anilist, id).await,
        Command::Genres => genres(&jikan).await,
        Command::Play {
            episode,
            id,
            title,
            open,
        } => play(&jikan, &anilist, &probe, &mirrors, episode, id, title, open).await,
    }
}

async fn search(jikan: &JikanClient, query: &str, limit: u32) -> Result<(), CoreError> {
    let items = jikan.search_media(query, limit).await.map_err(CoreError::from)?;
    if items.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for item in items {
        let episodes = item
            .episodes
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".into());
        println!("{:>7}  {} ({} eps)", item.id, item.title, episodes);
    }
    Ok(())
}

async fn detail(jikan: &JikanClient, anilist: &AniListClient, id: u64) -> Result<(), CoreError> {
    let item = jikan.get_media(id).await.map_err(CoreError::from)?;

    let resolver = EpisodeResolver::new(jikan, anilist);
    let (episodes, suggestions) = tokio::join!(
        resolver.resolve_episodes(&item),
        suggest::suggest(jikan, item.genres.first(), item.id),
    );
    let suggestions = suggestions?;

    println!("{} (id {})", item.title, item.id);
    if let Some(english) = &item.title_english {
        println!("English: {english}");
    }
    if let Some(native) = &item.title_native {
        println!("Native:  {native}");
    }
    if !item.synonyms.is_empty() {
        println!("Synonyms: {}", item.synonyms.join(", "));
    }
    if !item.genres.is_empty() {
        let names: Vec<&str> = item.genres.iter().map(|g| g.name.as_str()).collect();
        println!("Genres: {}", names.join(", "));
    }
    if let Some(synopsis) = &item.synopsis {
        println!("\n{synopsis}\n");
    }

    if episodes.is_empty() {
        println!("No episodes available.");
    } else {
        println!("Episodes: {}", episodes.len());
    }

    if let Some(sequel) = relations::find_sequel(&item) {
        println!("Next season: id {sequel} (try `torii detail {sequel}`)");
    }

    if suggestions.is_empty() {
        println!("No similar animes found.");
    } else {
        println!("Similar:");
        for suggestion in suggestions {
            println!("{:>7}  {}", suggestion.id, suggestion.title);
        }
    }
    Ok(())
}

async fn genres(jikan: &JikanClient) -> Result<(), CoreError> {
    let genres = jikan.get_genres().await.map_err(CoreError::from)?;
    for genre in genres {
        println!("{:>5}  {}", genre.id, genre.name);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn play(
    jikan: &JikanClient,
    anilist: &AniListClient,
    probe: &HeadProbe,
    mirrors: &MirrorSet,
    episode: u32,
    id: Option<u64>,
    title: Option<String>,
    open_url: bool,
) -> Result<(), CoreError> {
    if episode == 0 {
        return Err(CoreError::Config("episode ordinals are 1-based".into()));
    }

    let titles = match (id, title) {
        (Some(id), _) => {
            let item = jikan.get_media(id).await.map_err(CoreError::from)?;
            alias::aliases(&item)
        }
        (None, Some(title)) => match anilist.media_by_title(&title).await {
            Ok(record) => {
                if let Some(count) = record.episode_count {
                    if episode > count {
                        tracing::warn!(episode, count, "episode is past the known count");
                    }
                }
                record.variants
            }
            Err(e) => {
                tracing::warn!(error = %e, "secondary title lookup failed, using the raw title");
                vec![title]
            }
        },
        (None, None) => {
            return Err(CoreError::Config("either --id or --title is required".into()));
        }
    };

    let resolved = torii_core::resolve_stream(probe, &titles, episode, mirrors).await;
    if resolved.verified {
        println!("{}", resolved.url);
    } else {
        println!("{}", resolved.url);
        eprintln!("warning: no mirror confirmed this stream; URL is best-effort");
    }

    if open_url {
        open::that(&resolved.url)?;
    }
    Ok(())
}
