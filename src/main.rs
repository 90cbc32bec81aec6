use charm_tools::{github, padding, utils};
use clap::{Parser, Subcommand};

/// Helper tools for managing map submissions and charm images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download submission images from GitHub issues, named by embedded map metadata
    FetchIssues,
    /// Pad every image in a folder with transparent border pixels
    Pad,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::FetchIssues => {
            let username = utils::prompt("Enter your GitHub username: ")?;
            let repo = utils::prompt("Enter repo name to fetch from: ")?;
            let token = utils::prompt("Enter GitHub Personal Access Token: ")?;
            let start_issue = utils::prompt("Enter the starting issue number: ")?
                .parse::<u64>()
                .map_err(|e| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Invalid starting issue number: {}", e),
                    )
                })?;

            let api_url = github::issues_url(&username, &repo);
            if let Err(e) =
                github::fetch_and_download(&api_url, &token, start_issue, "downloadedImages").await
            {
                eprintln!("Error fetching issue images: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Pad => {
            if let Err(e) = padding::pad_folder_interactive() {
                eprintln!("Error padding images: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
