use clap::{Parser, Subcommand};
use tool_preview_lib::{commands, VERSION};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tool-preview")]
#[command(about = "Size-bounded previews of agent tool output")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cap text at a number of characters
    Text {
        /// Text to truncate (reads stdin when omitted)
        text: Option<String>,
        /// Maximum characters, marker included
        #[arg(long)]
        limit: usize,
    },

    /// Cap a tool call summary line
    Header {
        /// Header to truncate (reads stdin when omitted)
        text: Option<String>,
        /// Maximum characters (defaults to the configured header cap)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Cap tool output read from stdin, line by line
    Lines {
        /// Tool that produced the output (selects the line cap)
        #[arg(long)]
        tool: Option<String>,
        /// Maximum lines kept before the marker line
        #[arg(long)]
        max_lines: Option<usize>,
        /// Maximum characters per line
        #[arg(long)]
        max_line_chars: Option<usize>,
    },

    /// Render a tool call preview; output is read from stdin
    Preview {
        /// Tool name, e.g. Bash or Task
        #[arg(long)]
        tool: String,
        /// Summary shown next to the tool name
        #[arg(long)]
        header: Option<String>,
        /// Disable terminal colors
        #[arg(long)]
        plain: bool,
    },

    /// Print random spinner labels
    Verb {
        /// Number of labels
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Show the resolved configuration
    Config {
        /// Write the resolved values to a config file
        #[arg(long)]
        init: bool,
        /// With --init, write the global file instead of the local one
        #[arg(long, requires = "init")]
        global: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tool_preview_lib=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Text { text, limit } => commands::truncate::text(text, limit),
        Commands::Header { text, limit } => commands::truncate::header(text, limit),
        Commands::Lines {
            tool,
            max_lines,
            max_line_chars,
        } => commands::truncate::lines(tool, max_lines, max_line_chars),
        Commands::Preview {
            tool,
            header,
            plain,
        } => commands::preview::run(tool, header, plain),
        Commands::Verb { count } => commands::verb::run(count),
        Commands::Config { init, global } => commands::config::run(init, global),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
