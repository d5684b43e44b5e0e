use core::fmt;

/// Defines a closed set of reserved QL keywords and their sorted string table,
/// used to resolve a scanned identifier to a keyword via binary search.
///
/// Modeled on the sorted `KEYWORDS`/`KEYWORD_STRINGS` pair the teacher
/// generates with its `define_keyword!` macro (`usql-core/src/macros.rs`):
/// the strings must stay sorted, since [`Keyword::lookup`] binary-searches
/// them.
macro_rules! define_keywords {
    ($($variant:ident),* $(,)?) => {
        /// A reserved QL keyword.
        #[allow(missing_docs)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            /// All keywords, in the same order as [`Keyword::STRINGS`].
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// All keyword strings, sorted ascending so [`Keyword::lookup`]
            /// can binary-search them.
            pub const STRINGS: &'static [&'static str] = &[$(stringify!($variant)),*];
        }
    };
}

define_keywords! {
    ALL, ALTER, AND, ANY, AS, ASC, BEGIN, BY, CONTINUOUS, CREATE, DATABASE,
    DATABASES, DEFAULT, DELETE, DESC, DISTINCT, DROP, DURATION, END, EXISTS,
    FALSE, FIELD, FOR, FROM, GRANT, GROUP, IF, IN, INTO, JOIN, KEY, KEYS,
    LIMIT, MEASUREMENT, MEASUREMENTS, MERGE, NOT, OFFSET, ON, OR, ORDER,
    PASSWORD, POLICIES, POLICY, PRIVILEGES, QUERIES, QUERY, READ,
    REPLICATION, RETENTION, REVOKE, SELECT, SERIES, SET, SHOW, TAG, TAGS,
    TIME, TO, TRUE, USER, USERS, VALUES, WHERE, WITH, WRITE,
}

impl Keyword {
    /// Looks up a keyword by its case-insensitive spelling.
    pub fn lookup(word: &str) -> Option<Self> {
        let upper = word.to_uppercase();
        Self::STRINGS
            .binary_search(&upper.as_str())
            .map(|i| Self::ALL[i])
            .ok()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::STRINGS[Self::ALL.iter().position(|k| k == self).unwrap()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_sorted_for_binary_search() {
        let mut sorted = Keyword::STRINGS.to_vec();
        sorted.sort_unstable();
        assert_eq!(Keyword::STRINGS, sorted.as_slice());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Keyword::lookup("select"), Some(Keyword::SELECT));
        assert_eq!(Keyword::lookup("SELECT"), Some(Keyword::SELECT));
        assert_eq!(Keyword::lookup("SeLeCt"), Some(Keyword::SELECT));
        assert_eq!(Keyword::lookup("selection"), None);
    }
}
