use super::*;
#[derive(Parser)]
#[command(author, version, about)]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Show an organization's repository overview")]
    Show(ShowArgs),
    #[command(about = "Manage config")]
    Config(ConfigArgs),
}

#[derive(Parser)]
pub(super) struct ShowArgs {
    #[arg(help = "Organization name (defaults to the configured one)")]
    pub(super) organization: Option<String>,
    #[arg(long, help = "API host, e.g. https://ghe.example.com/api/v3")]
    pub(super) host: Option<String>,
    #[arg(long, help = "Only list repositories with more stars than this")]
    pub(super) min_stars: Option<u64>,
    #[arg(long, help = "How many recently updated repositories to list")]
    pub(super) recent: Option<usize>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds"
    )]
    pub(super) timeout: Option<u64>,
    #[arg(long, help = "Also list every loaded repository")]
    pub(super) all: bool,
    #[arg(long, help = "Print the overview as JSON")]
    pub(super) json: bool,
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Write a config file")]
    Init(InitArgs),
    #[command(about = "Print the effective config")]
    Show,
}

#[derive(Parser)]
pub(super) struct InitArgs {
    #[arg(long)]
    pub(super) org: String,
    #[arg(long)]
    pub(super) host: Option<String>,
    #[arg(long, help = "GitHub token, saved to the system keyring")]
    pub(super) token: Option<String>,
    #[arg(long)]
    pub(super) min_stars: Option<u64>,
    #[arg(long)]
    pub(super) recent: Option<usize>,
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(super) timeout: Option<u64>,
}
