use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghm")]
#[command(about = "GitHub contribution metrics with streaks, activity graphs, and year comparison")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, short, global = true, help = "GitHub username (defaults to the authenticated user)")]
    pub username: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    Report {
        #[arg(help = "Year(s) to report (defaults to the current year)")]
        years: Vec<i32>,

        #[arg(long, short = 'y', help = "Additional year (repeatable)")]
        year: Vec<i32>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Compare {
        #[arg(help = "Years to compare side by side", num_args = 2..)]
        years: Vec<i32>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Report { mut years, year, json } => {
                years.extend(year);
                crate::report::exec(self.common, years, json, false)
            }
            Commands::Compare { years, json } => {
                crate::report::exec(self.common, years, json, true)
            }
        }
    }
}
