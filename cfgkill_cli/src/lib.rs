use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Remove conditional-compilation regions for a config macro from C sources.",
	long_about = "cfgkill clears every C preprocessor conditional block and directive for a \
	              given config macro from a source file, preserving the compilability of what \
	              remains.\n\nBy default the macro is resolved as undefined: `#ifdef` bodies are \
	              deleted and `#ifndef` bodies survive with their directive lines removed. \
	              Prefix the macro name with `Y` (as in CONFIG=y) to resolve it as defined \
	              instead, deleting `#else` branches.\n\nQuick start:\n  cfgkill strip driver.c \
	              CONFIG_FOO   Resolve CONFIG_FOO as undefined\n  cfgkill strip driver.c \
	              YCONFIG_FOO  Resolve CONFIG_FOO as defined\n  cfgkill list driver.c            \
	              Show which config macros the file guards"
)]
pub struct CfgkillCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Strip every guard block for a config macro from a source file.
	///
	/// Scans the file for `#ifdef`/`#ifndef` directives naming the macro,
	/// resolves each block's `#else`/`#endif` (skipping nested unrelated
	/// conditionals), and writes the surviving lines to `<file>_out`.
	///
	/// If the macro guards nothing, nothing is written and the command
	/// exits successfully with an informational message. Malformed nesting
	/// and `#elif` abort the whole run; no partial output is ever written.
	Strip {
		/// Path to the source file to transform.
		file: PathBuf,

		/// The config macro name. A leading `Y` (e.g. `YCONFIG_FOO`)
		/// resolves the macro as defined and is stripped before matching.
		config: String,

		/// Resolve the macro as defined without the `Y` prefix; the macro
		/// name is taken literally.
		#[arg(long, default_value_t = false)]
		include: bool,

		/// Write the result here instead of `<file>_out`.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// Report what would change without writing any file.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// Print a unified diff of the change.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List the config macros guarded by conditionals in a source file.
	///
	/// Enumerates every named `#ifdef`/`#ifndef` with its line number and
	/// guard kind, grouped by macro name. Useful for auditing how heavily
	/// a file leans on compile-time config options before stripping them.
	List {
		/// Path to the source file to inspect.
		file: PathBuf,

		/// Output format. Use `text` for human-readable output or `json`
		/// for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
