use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use cfgkill_cli::CfgkillCli;
use cfgkill_cli::Commands;
use cfgkill_cli::OutputFormat;
use cfgkill_core::DeletionRange;
use cfgkill_core::Document;
use cfgkill_core::GuardOccurrence;
use cfgkill_core::Mode;
use cfgkill_core::StripOutcome;
use cfgkill_core::StripRequest;
use cfgkill_core::strip_file;
use cfgkill_core::survey;
use cfgkill_core::write_output;
use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = CfgkillCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Strip {
			file,
			config,
			include,
			output,
			dry_run,
			diff,
		}) => run_strip(args.verbose, file, &config, include, output, dry_run, diff),
		Some(Commands::List { file, format }) => run_list(&file, format),
		None => {
			eprintln!("No subcommand specified. Run `cfgkill --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<cfgkill_core::CfgkillError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

#[allow(clippy::fn_params_excessive_bools)]
fn run_strip(
	verbose: bool,
	file: PathBuf,
	config: &str,
	include: bool,
	output: Option<PathBuf>,
	dry_run: bool,
	show_diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let request = if include {
		StripRequest::new(config, Mode::Include)
	} else {
		StripRequest::parse(config)
	};

	if verbose {
		println!("config is: {}", request.name);
		if request.mode == Mode::Include {
			println!("include mode: the guarded code is kept");
		}
	}

	let mut strip = strip_file(&file, &request)?;
	if let Some(path) = output {
		strip.output = path;
	}

	match &strip.outcome {
		StripOutcome::NotFound => {
			println!(
				"config option `{}` not found in {}",
				request.name,
				file.display()
			);
		}
		StripOutcome::Stripped {
			removed,
			block_count,
			..
		} => {
			let removed_lines: usize = removed.iter().map(DeletionRange::line_count).sum();

			if show_diff {
				let new_content = strip.new_content().unwrap_or_default();
				print_diff(&strip.original, &new_content);
			}

			if dry_run {
				println!(
					"Dry run: would remove {removed_lines} line(s) across {block_count} \
					 block(s); nothing written."
				);
			} else {
				write_output(&strip)?;
				println!(
					"Removed {removed_lines} line(s) across {block_count} block(s): {}",
					strip.output.display()
				);
			}
		}
	}

	Ok(())
}

fn run_list(file: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let document = Document::read(file)?;
	let occurrences = survey(&document);

	// Group by macro name; BTreeMap keeps the listing sorted.
	let mut configs: BTreeMap<String, Vec<&GuardOccurrence>> = BTreeMap::new();
	for occurrence in &occurrences {
		configs
			.entry(occurrence.name.clone())
			.or_default()
			.push(occurrence);
	}

	match format {
		OutputFormat::Json => {
			let entries: Vec<serde_json::Value> = configs
				.iter()
				.map(|(name, guards)| {
					let guard_entries: Vec<serde_json::Value> = guards
						.iter()
						.map(|guard| {
							serde_json::json!({
								"line": guard.line + 1,
								"kind": guard.kind.to_string().trim_start_matches('#'),
							})
						})
						.collect();
					serde_json::json!({
						"name": name,
						"occurrences": guard_entries,
					})
				})
				.collect();
			let output = serde_json::json!({ "configs": entries });
			println!("{output}");
		}
		OutputFormat::Text => {
			if configs.is_empty() {
				println!("No guarded configs found.");
				return Ok(());
			}

			println!("{}", colored!("Guarded configs:", bold));
			for (name, guards) in &configs {
				let lines: Vec<String> = guards
					.iter()
					.map(|guard| format!("{} ({})", guard.line + 1, guard.kind))
					.collect();
				println!(
					"  {name}  {} occurrence(s): line(s) {}",
					guards.len(),
					lines.join(", ")
				);
			}
			println!(
				"\n{} config(s), {} guard(s)",
				configs.len(),
				occurrences.len()
			);
		}
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
