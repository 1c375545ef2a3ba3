use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Search and analyse every configured vehicle
    Run {
        #[clap(short, long)]
        base_url: Option<String>,
        #[clap(short, long)]
        token_file: Option<String>,
        /// Registration number to test; repeat to test several
        #[clap(short, long = "reg")]
        registrations: Vec<String>,
        #[clap(long)]
        timeout_secs: Option<u64>,
    },
    /// Log in and save the auth response as the token file
    Login {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        password: String,
        #[clap(short, long)]
        base_url: Option<String>,
        #[clap(short, long)]
        token_file: Option<String>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
}
