//! Compile-time keyword, punctuator and primitive-type tables.
//!
//! These are the frozen, textual sets referenced throughout the grammar
//! (reserved keywords, longest-match punctuators, primitive type keywords).
//! Order matters for [`PUNCTUATORS`]: longest/most-specific entries must
//! come first so that `<<=` is matched before `<<` before `<`.

pub const KEYWORDS: &[&[u8]] = &[
    b"auto", b"break", b"case", b"char", b"const", b"continue", b"default",
    b"do", b"double", b"else", b"enum", b"extern", b"float", b"for", b"goto",
    b"if", b"inline", b"int", b"long", b"register", b"restrict", b"return",
    b"short", b"signed", b"sizeof", b"static", b"struct", b"switch",
    b"typedef", b"union", b"unsigned", b"void", b"volatile", b"while",
    b"_Bool", b"_Complex", b"_Imaginary",
];

/// Longest-match punctuator table. The second `&` is intentionally
/// unreachable: it exists only to keep the table's index stable with the
/// canonical contract.
pub const PUNCTUATORS: &[&[u8]] = &[
    b"%:%:", b"%:", b"%>", b"<%", b":>", b"<:", b"##", b"#", b",", b"|=",
    b"^=", b"&=", b">>=", b"<<=", b"-=", b"+=", b"%=", b"/=", b"*=", b"==",
    b"=", b"...", b";", b":", b"?", b"||", b"&&", b"|", b"^", b"!=", b"<=",
    b">=", b"<<", b">>", b"<", b">", b"&", b"/", b"!", b"~", b"->", b"--",
    b"++", b"-", b"+", b"*", b"%", b"&", b".", b"{", b"}", b"(", b")", b"[",
    b"]",
];

/// Primitive type keywords, index-aligned with the bit order in
/// [`crate::bitset::PrimitiveTypeSet`]. The two `long` entries both set the
/// `long` bit on first hit and `long-long` on second hit.
pub const PRIMITIVE_KEYWORDS: &[&str] = &[
    "void", "char", "short", "int", "long", "long", "float", "double",
    "signed", "unsigned", "_Bool", "_Complex",
];
