//! Shared documents for the crate tests.

use crate::Document;

pub fn doc(content: &str) -> Document {
	Document::parse(content)
}

/// `#ifdef ... #endif`
pub fn if_block() -> Document {
	doc("#ifdef CONFIG_FOO\nfoo();\n#endif\nbar();\n")
}

/// `#ifndef ... #endif`
pub fn notif_block() -> Document {
	doc("#ifndef CONFIG_FOO\nfoo();\n#endif\nbar();\n")
}

/// `#ifdef ... #else ... #endif`
pub fn ifelse_block() -> Document {
	doc("#ifdef CONFIG_FOO\nfoo();\n#else\nfallback();\n#endif\nbar();\n")
}

/// `#ifndef ... #else ... #endif`
pub fn notifelse_block() -> Document {
	doc("#ifndef CONFIG_FOO\nfallback();\n#else\nfoo();\n#endif\nbar();\n")
}

/// An unrelated `#ifdef CONFIG_BAR` block nested inside the target block.
pub fn nested_block() -> Document {
	doc("#ifdef CONFIG_FOO\n#ifdef CONFIG_BAR\nx();\n#endif\na();\n#endif\nb();\n")
}

/// Two independent target regions separated by other code.
pub fn two_regions() -> Document {
	doc(
		"#ifdef CONFIG_FOO\nfirst();\n#endif\nkeep_one();\n#ifdef CONFIG_FOO\nsecond();\n#endif\nkeep_two();\n",
	)
}
