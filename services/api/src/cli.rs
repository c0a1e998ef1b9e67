use crate::demo::{
    run_catalog, run_course_recommendation, run_demo, run_stream_recommendation, CatalogArgs,
    CourseArgs, DemoArgs, StreamArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pathway_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Pathway Advisor",
    about = "Recommend degree courses and after-10th streams from student assessment data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile document against a catalog
    Recommend {
        #[command(subcommand)]
        command: RecommendCommand,
    },
    /// Print the course or stream catalog in use
    Catalog(CatalogArgs),
    /// Walk through sample students end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RecommendCommand {
    /// Rank degree programs for an after-12th student
    Courses(CourseArgs),
    /// Build the stream report for an after-10th student
    Streams(StreamArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON object of student id -> profile served by the student routes
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend {
            command: RecommendCommand::Courses(args),
        } => run_course_recommendation(args),
        Command::Recommend {
            command: RecommendCommand::Streams(args),
        } => run_stream_recommendation(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args),
    }
}
