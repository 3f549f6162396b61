use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "relief",
    version,
    about = "Lucky Loo Court of Relief — plead your case before the AI jury"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Put a plea before the full Court and receive the verdict
    Plead(PleadArgs),
    /// Run only the desperation face scan and print the structured report
    Scan(ScanArgs),
}

#[derive(Parser, Clone)]
pub struct PleadArgs {
    /// The plea for bathroom access
    #[arg(long)]
    pub plea: String,

    /// Face photo backing the plea (JPEG/PNG/GIF/WEBP)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Stage-demo mode: the Court is rigged in your favor
    #[arg(long)]
    pub demo: bool,

    /// Force pre-written responses, no model calls
    #[arg(long, conflicts_with = "live")]
    pub mock: bool,

    /// Force live deliberation even when mock is the configured default
    #[arg(long)]
    pub live: bool,
}

#[derive(Parser, Clone)]
pub struct ScanArgs {
    /// Face photo to analyze
    #[arg(long)]
    pub image: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mock_and_live_conflict() {
        let res = Cli::try_parse_from(["relief", "plead", "--plea", "x", "--mock", "--live"]);
        assert!(res.is_err());
    }

    #[test]
    fn plead_parses_the_full_flag_set() {
        let cli = Cli::try_parse_from([
            "relief", "plead", "--plea", "help", "--image", "face.jpg", "--demo", "--mock",
        ])
        .unwrap();
        match cli.cmd {
            Command::Plead(args) => {
                assert_eq!(args.plea, "help");
                assert_eq!(args.image, Some(PathBuf::from("face.jpg")));
                assert!(args.demo);
                assert!(args.mock);
                assert!(!args.live);
            }
            Command::Scan(_) => panic!("parsed the wrong subcommand"),
        }
    }
}
