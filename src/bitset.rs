//! Small compile-time bitsets for declaration specifiers.
//!
//! Storage class, function specifier and type qualifier sets are tiny and
//! fixed, so they are plain integer bitsets rather than `Vec<Keyword>` or a
//! pulled-in `bitflags` dependency.

macro_rules! flag_set {
    ($(#[$meta:meta])* $name:ident : $repr:ty { $($(#[$vmeta:meta])* $variant:ident = $bit:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
        pub struct $name($repr);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: $name = $name(1 << $bit);
            )+

            pub const EMPTY: $name = $name(0);

            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub fn contains(self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn insert(&mut self, other: $name) {
                self.0 |= other.0;
            }

            pub fn union(self, other: $name) -> $name {
                $name(self.0 | other.0)
            }
        }
    };
}

flag_set!(
    /// Storage-class keywords.
    StorageClassSet: u8 {
        TYPEDEF = 0,
        EXTERN = 1,
        STATIC = 2,
        AUTO = 3,
        REGISTER = 4,
    }
);

flag_set!(
    /// Function specifiers. Only `inline` exists in this C99 subset.
    FunctionSpecifierSet: u8 {
        INLINE = 0,
    }
);

flag_set!(
    /// Type qualifiers, usable on pointers, array element types and
    /// declaration specifiers alike.
    TypeQualifierSet: u8 {
        CONST = 0,
        RESTRICT = 1,
        VOLATILE = 2,
    }
);

/// Primitive type bitset. Merge rules (duplicate `long` becomes `long long`,
/// any other duplicate or cross-tag combination is a parse error) live in
/// `decl::declaration_specifiers`, not here: this type only stores bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PrimitiveTypeSet(u16);

impl PrimitiveTypeSet {
    pub const VOID: Self = Self(1 << 0);
    pub const CHAR: Self = Self(1 << 1);
    pub const SHORT: Self = Self(1 << 2);
    pub const INT: Self = Self(1 << 3);
    pub const LONG: Self = Self(1 << 4);
    pub const LONG_LONG: Self = Self(1 << 5);
    pub const FLOAT: Self = Self(1 << 6);
    pub const DOUBLE: Self = Self(1 << 7);
    pub const SIGNED: Self = Self(1 << 8);
    pub const UNSIGNED: Self = Self(1 << 9);
    pub const BOOL: Self = Self(1 << 10);
    pub const COMPLEX: Self = Self(1 << 11);

    pub const EMPTY: Self = Self(0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Bit for table index `i` in [`crate::tables::PRIMITIVE_KEYWORDS`].
    pub fn from_keyword_index(i: usize) -> Self {
        match i {
            0 => Self::VOID,
            1 => Self::CHAR,
            2 => Self::SHORT,
            3 => Self::INT,
            4 | 5 => Self::LONG, // both `long` table entries map here; see decl.rs merge rule
            6 => Self::FLOAT,
            7 => Self::DOUBLE,
            8 => Self::SIGNED,
            9 => Self::UNSIGNED,
            10 => Self::BOOL,
            11 => Self::COMPLEX,
            _ => unreachable!("table index out of range"),
        }
    }
}
