use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "kprofile",
    version,
    about = "Build declarative cluster profiles"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Settings file to use instead of the default")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Create(CreateArgs),
    Templates,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "Cluster name, used as prefix for every derived resource")]
    pub name: String,
    #[arg(long, short = 't', help = "Profile template key")]
    pub template: Option<String>,
    #[arg(long, help = "Use this kubeadm token instead of generating one")]
    pub token: Option<String>,
    #[arg(long, short = 'o', help = "Write the profile as JSON to this file")]
    pub output: Option<PathBuf>,
}
