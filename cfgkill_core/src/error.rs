use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CfgkillError {
	#[error(transparent)]
	#[diagnostic(code(cfgkill::io_error))]
	Io(#[from] std::io::Error),

	#[error("unmatched conditional starting at line {line}")]
	#[diagnostic(
		code(cfgkill::unmatched_conditional),
		help("every `#ifdef`/`#ifndef` needs a matching `#endif`; the block opened at line {line} never closes")
	)]
	UnmatchedConditional { line: usize },

	#[error("`#elif` found at line {line}")]
	#[diagnostic(
		code(cfgkill::elif_unsupported),
		help("`#elif` chains are not supported; rewrite them as nested `#ifdef`/`#else` blocks before stripping")
	)]
	ElifUnsupported { line: usize },
}

pub type CfgkillResult<T> = Result<T, CfgkillError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
