use logos::Logos;

/// Raw tokens produced by logos for flat tokenization of one source line.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("#ifdef")]
	Ifdef,
	#[token("#ifndef")]
	Ifndef,
	#[token("#elif")]
	Elif,
	#[token("#else")]
	Else,
	#[token("#endif")]
	Endif,
	#[regex(r"[ \t\r]+")]
	Whitespace,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
	Ident,
}

/// A conditional-compilation directive recognized on a single line.
///
/// `Ifdef`/`Ifndef` carry their macro argument only when the keyword is
/// followed by whitespace and an identifier, so `#ifdef CONFIG_FOOBAR`
/// can never satisfy a search for `CONFIG_FOO`. `Elif` is recognized
/// purely so the block matcher can reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
	Ifdef(Option<String>),
	Ifndef(Option<String>),
	Elif,
	Else,
	Endif,
}

impl Directive {
	/// Whether this directive opens a conditional block.
	pub fn is_start(&self) -> bool {
		matches!(self, Directive::Ifdef(_) | Directive::Ifndef(_))
	}

	/// The macro argument of a start directive, when one was present.
	pub fn argument(&self) -> Option<&str> {
		match self {
			Directive::Ifdef(name) | Directive::Ifndef(name) => name.as_deref(),
			_ => None,
		}
	}
}

/// Classify one source line as a directive, or `None` for ordinary code.
///
/// The directive keyword must be the first non-whitespace token on the
/// line. Anything after the keyword (or after the argument of a start
/// directive) is ignored, which mirrors how trailing comments behave in
/// practice, e.g. `#endif /* CONFIG_FOO */`.
pub fn classify(line: &str) -> Option<Directive> {
	let mut lexer = RawToken::lexer(line);

	let first = loop {
		match lexer.next() {
			Some(Ok(RawToken::Whitespace)) => {}
			other => break other,
		}
	};

	match first {
		Some(Ok(RawToken::Ifdef)) => Some(Directive::Ifdef(read_argument(&mut lexer))),
		Some(Ok(RawToken::Ifndef)) => Some(Directive::Ifndef(read_argument(&mut lexer))),
		Some(Ok(RawToken::Elif)) => Some(Directive::Elif),
		Some(Ok(RawToken::Else)) => Some(Directive::Else),
		Some(Ok(RawToken::Endif)) => Some(Directive::Endif),
		_ => None,
	}
}

/// Read the macro argument following a start keyword. The argument only
/// counts when separated from the keyword by whitespace.
fn read_argument(lexer: &mut logos::Lexer<'_, RawToken>) -> Option<String> {
	match lexer.next()? {
		Ok(RawToken::Whitespace) => {}
		_ => return None,
	}

	match lexer.next()? {
		Ok(RawToken::Ident) => Some(lexer.slice().to_string()),
		_ => None,
	}
}
