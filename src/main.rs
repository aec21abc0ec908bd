use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "fdoc",
    version,
    about = "Scanner and renderer for FeatureDoc documentation files"
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Terminal,
    Markdown,
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a FeatureDoc file
    Render {
        /// Path to the .md file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: RenderFormat,
    },

    /// Scan FeatureDoc file(s) and report dropped content
    Check {
        /// Path to the .md file(s)
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, format } => {
            handle_render(&file, format)?;
        }
        Commands::Check { files } => {
            handle_check(&files, cli.quiet)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str, format: RenderFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let result = featuredoc_parse::scan(&content);

    // Print scan diagnostics to stderr
    for diag in &result.diagnostics {
        let line_info = match diag.span {
            Some(span) => format!("{}:{}", file, span.start_line),
            None => file.to_string(),
        };
        eprintln!("{}: {}", line_info, diag.message);
    }

    let output = match format {
        RenderFormat::Terminal => result.doc.to_terminal(),
        RenderFormat::Markdown => result.doc.to_markdown(),
        RenderFormat::Html => result.doc.to_html(),
        RenderFormat::Json => serde_json::to_string_pretty(&result.doc.blocks)?,
    };

    println!("{output}");
    Ok(())
}

fn handle_check(files: &[String], quiet: bool) -> Result<()> {
    let mut has_errors = false;

    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

        let result = featuredoc_parse::scan(&content);

        if result.diagnostics.is_empty() {
            if !quiet {
                println!("{}: {}", file, "OK".green());
            }
        } else {
            for diag in &result.diagnostics {
                let severity_str = match diag.severity {
                    featuredoc_parse::Severity::Error => {
                        has_errors = true;
                        format!("{}", "error".red().bold())
                    }
                    featuredoc_parse::Severity::Warning => {
                        format!("{}", "warning".yellow().bold())
                    }
                    featuredoc_parse::Severity::Info => {
                        format!("{}", "info".cyan().bold())
                    }
                };

                let line_info = match diag.span {
                    Some(span) => format!("{}:{}", file, span.start_line),
                    None => file.to_string(),
                };

                let code_str = match &diag.code {
                    Some(c) => format!("[{}] ", c),
                    None => String::new(),
                };

                println!("{line_info}: {severity_str}: {code_str}{}", diag.message);
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
