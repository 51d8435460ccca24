use clap::{Parser, Subcommand, ValueEnum};

mod diagnostics;
mod dispatch;
mod entity;
mod guard;
mod registry;
mod render;
mod report;

pub type Result<T> = anyhow::Result<T>;

use anyhow::Context;
use regex::Regex;

#[derive(Parser)]
#[command(name = "entity-classifier")]
#[command(about = "Classify tagged devices and staff members", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every entity and print one line per entity.
    Report {
        /// Registry JSON file. Uses the built-in example registry when omitted.
        #[arg(long)]
        registry: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Only report entities whose label (device id or staff name) matches.
        #[arg(long)]
        filter: Option<String>,

        /// Text reported for entities with an unlisted tag.
        #[arg(long)]
        unknown_message: Option<String>,

        /// Also print each entity's capability output (connect, light, mute, manage).
        #[arg(long)]
        capabilities: bool,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Validate a registry and print how many entities of each kind it holds.
    Check {
        #[arg(long)]
        registry: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            registry,
            format,
            filter,
            unknown_message,
            capabilities,
            out,
        } => {
            // 1) Registry + settings. The CLI message wins over the file's.
            let loaded = load(registry.as_deref())?;
            let dispatcher = dispatch::Dispatcher::new(
                unknown_message
                    .or(loaded.unknown_message)
                    .unwrap_or_else(|| dispatch::DEFAULT_UNKNOWN_MESSAGE.to_string()),
            );

            let filter = filter
                .map(|f| {
                    Regex::new(&f).with_context(|| {
                        diagnostics::error_message(format!("invalid --filter pattern {:?}", f))
                    })
                })
                .transpose()?;

            // 2) Dispatch.
            let data = report::build_report(&loaded.registry, &dispatcher, filter.as_ref());

            // 3) Render.
            let rendered = match format {
                Format::Text => render::render_text_report(&data, capabilities),
                Format::Json => render::render_json_report(&data)?,
            };

            print!("{}", emit(&rendered, out.as_deref())?);
        }
        Commands::Check { registry } => {
            let loaded = load(registry.as_deref())?;
            print!("{}", check_summary(&loaded.registry));
        }
    }

    Ok(())
}

/// Write `rendered` to `out` when given, and return what goes to stdout.
fn emit(rendered: &str, out: Option<&str>) -> Result<String> {
    match out {
        Some(out) => {
            std::fs::write(out, rendered)
                .with_context(|| diagnostics::error_message(format!("write report {}", out)))?;
            Ok(format!("Wrote {}\n", out))
        }
        None => Ok(rendered.to_string()),
    }
}

/// Per-kind counts for `check`, without describing any entity.
fn check_summary(registry: &registry::Registry) -> String {
    let counts = registry.counts_by_kind();
    let sum = |pred: fn(entity::Kind) -> bool| -> usize {
        counts
            .iter()
            .filter(|(kind, _)| pred(**kind))
            .map(|(_, n)| n)
            .sum()
    };

    let mut s = format!(
        "{} entities ({} devices, {} staff, {} unknown)\n",
        registry.len(),
        sum(entity::Kind::is_device),
        sum(entity::Kind::is_staff),
        counts.get(&entity::Kind::Unknown).copied().unwrap_or(0)
    );
    for (kind, count) in &counts {
        s.push_str(&format!("  {:<16} {}\n", kind.as_str(), count));
    }
    s
}

fn load(path: Option<&str>) -> Result<registry::ValidatedRegistry> {
    match path {
        Some(path) => registry::load_registry_file(path),
        None => Ok(registry::ValidatedRegistry {
            registry: registry::Registry::builtin(),
            unknown_message: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_defaults_to_builtin_text() {
        let cli = Cli::try_parse_from(["entity-classifier", "report"]).unwrap();
        match cli.cmd {
            Commands::Report {
                registry,
                format,
                filter,
                unknown_message,
                capabilities,
                out,
            } => {
                assert_eq!(registry, None);
                assert_eq!(format, Format::Text);
                assert_eq!(filter, None);
                assert_eq!(unknown_message, None);
                assert!(!capabilities);
                assert_eq!(out, None);
            }
            Commands::Check { .. } => panic!("parsed as check"),
        }
    }

    #[test]
    fn report_accepts_all_flags() {
        let cli = Cli::try_parse_from([
            "entity-classifier",
            "report",
            "--registry",
            "registry.json",
            "--format",
            "json",
            "--filter",
            "^T",
            "--unknown-message",
            "Who?",
            "--capabilities",
            "-o",
            "out.json",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Report {
                registry,
                format,
                filter,
                unknown_message,
                capabilities,
                out,
            } => {
                assert_eq!(registry.as_deref(), Some("registry.json"));
                assert_eq!(format, Format::Json);
                assert_eq!(filter.as_deref(), Some("^T"));
                assert_eq!(unknown_message.as_deref(), Some("Who?"));
                assert!(capabilities);
                assert_eq!(out.as_deref(), Some("out.json"));
            }
            Commands::Check { .. } => panic!("parsed as check"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["entity-classifier", "report", "--format", "html"]).is_err());
    }

    #[test]
    fn check_parses_registry_flag() {
        let cli =
            Cli::try_parse_from(["entity-classifier", "check", "--registry", "r.json"]).unwrap();
        match cli.cmd {
            Commands::Check { registry } => assert_eq!(registry.as_deref(), Some("r.json")),
            Commands::Report { .. } => panic!("parsed as report"),
        }
    }

    #[test]
    fn check_summary_counts_builtin_registry() {
        let summary = check_summary(&registry::Registry::builtin());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "7 entities (3 devices, 4 staff, 0 unknown)",
                "  Keyboard         1",
                "  Storage          1",
                "  Audio            1",
                "  Employee         3",
                "  Manager          1",
            ]
        );
    }

    #[test]
    fn check_summary_counts_unknown_entities() {
        let registry = registry::Registry::new(vec![
            entity::UnknownEntity::new("Printer").into(),
            entity::UnknownEntity::new("Scanner").into(),
        ]);
        let summary = check_summary(&registry);
        assert_eq!(
            summary.lines().next(),
            Some("2 entities (0 devices, 0 staff, 2 unknown)")
        );
        assert_eq!(summary.lines().nth(1), Some("  Unknown          2"));

        assert_eq!(
            check_summary(&registry::Registry::default()),
            "0 entities (0 devices, 0 staff, 0 unknown)\n"
        );
    }

    #[test]
    fn emit_without_out_returns_rendered() {
        assert_eq!(emit("a\nb\n", None).unwrap(), "a\nb\n");
    }

    #[test]
    fn emit_writes_file_and_reports_path() {
        let path = std::env::temp_dir().join(format!(
            "entity-classifier-report-{}.txt",
            std::process::id()
        ));
        let path = path.to_str().unwrap().to_string();

        let stdout = emit("[0] Keyboard kbd-001\n", Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(stdout, format!("Wrote {}\n", path));
        assert_eq!(written, "[0] Keyboard kbd-001\n");
    }

    #[test]
    fn emit_reports_unwritable_path() {
        let dir = std::env::temp_dir().join("entity-classifier-missing-dir");
        let path = dir.join("nested").join("out.txt");
        let err = emit("x", Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().starts_with("ERROR: write report"), "{}", err);
    }

    #[test]
    fn load_without_path_uses_builtin_registry() {
        let loaded = load(None).unwrap();
        assert_eq!(loaded.registry, registry::Registry::builtin());
        assert_eq!(loaded.unknown_message, None);
    }
}
