use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use blogstore::api::HttpApi;
use blogstore::config::Config;
use blogstore::logging::init_tracing;
use blogstore::posts::selectors::{all_posts, author_name, posts_error, posts_status};
use blogstore::posts::{FetchStatus, Post, PostsByUser, PostsController, UserId};
use blogstore::users::UserList;

/// Fetch posts and users once and print what the client state holds.
#[derive(Debug, Parser)]
#[command(name = "blogstore", version)]
struct Args {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only list posts by this user.
    #[arg(long)]
    user: Option<UserId>,

    /// Maximum number of posts to print.
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let api = HttpApi::new(&config.api).context("building HTTP client")?;
    tracing::info!(base_url = %api.base_url(), "Starting");

    let users = match UserList::fetch(&api).await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load users, authors will be unknown");
            UserList::default()
        }
    };

    let mut controller = PostsController::new(api).with_load_config(&config.load);
    if controller.fetch_posts().await == FetchStatus::Failed {
        anyhow::bail!(
            "fetching posts failed: {}",
            posts_error(controller.state()).unwrap_or("unknown error")
        );
    }

    let state = controller.state();
    tracing::info!(
        status = %posts_status(state),
        posts = state.posts().len(),
        users = users.len(),
        "Posts loaded"
    );

    let by_user = PostsByUser::new();
    let selected: Vec<Post> = match args.user {
        Some(user_id) => by_user.select(state, user_id).to_vec(),
        None => all_posts(state).into_iter().cloned().collect(),
    };

    for post in selected.iter().take(args.limit) {
        let reactions: Vec<String> = post
            .reactions
            .iter()
            .map(|(kind, n)| format!("{} {}", kind.emoji(), n))
            .collect();
        println!(
            "#{:<4} {}  by {}  ({})",
            post.id,
            post.title,
            author_name(post, &users),
            post.created_at.to_rfc3339()
        );
        println!("      {}", reactions.join(" "));
    }

    Ok(())
}
