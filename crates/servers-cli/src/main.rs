mod formatters;

use std::path::PathBuf;

use clap::Parser;

use servers_core::filter::filter_servers;
use servers_core::load::load_servers;

#[derive(Parser)]
#[command(name = "list-servers", about = "List and filter servers")]
struct Cli {
    /// Load configuration from FILE
    #[arg(short, long, value_name = "FILE", default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Filter by environment
    #[arg(short, long, default_value = "")]
    env: String,

    /// Filter by tags (comma-separated, prefix a tag with ! to exclude it)
    #[arg(short, long)]
    tags: Vec<String>,

    /// Output format: names, json, or anything else for columnar
    #[arg(short, long, default_value = "")]
    format: String,
}

fn default_config_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    PathBuf::from(home).join(".dcr").join("servers.json")
}

fn main() {
    let cli = Cli::parse();

    let servers = match load_servers(&cli.config) {
        Ok(servers) => servers,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let servers = filter_servers(servers, &cli.env, &cli.tags);

    match cli.format.as_str() {
        "names" => formatters::names::print(&servers),
        "json" => formatters::json::print(&servers),
        _ => formatters::columnar::print(&servers),
    }

    // Callers expect a blank line after every rendering.
    println!();
}
