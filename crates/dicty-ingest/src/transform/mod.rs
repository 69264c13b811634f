//! Row transforms
//!
//! Pure, stateless mappings from one source row (plus the read-only
//! phenotype lookup where needed) to zero or more output records. No
//! cross-row state: every call is independent given the same lookup
//! snapshot, so rows can be processed in any order.

mod gene;
mod gene_to_phenotype;

pub use gene::transform_gene;
pub use gene_to_phenotype::transform_gene_to_phenotype;

/// Split a delimited field into trimmed, non-empty entries
///
/// Order is preserved and duplicates are kept. A blank or
/// whitespace-only field yields an empty list.
pub(crate) fn parse_delimited_list(value: &str, delimiters: &[char]) -> Vec<String> {
    value
        .split(|c| delimiters.contains(&c))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimited_list_comma_and_pipe() {
        assert_eq!(
            parse_delimited_list("RasGEFB, RasGEF", &[',', '|']),
            vec!["RasGEFB", "RasGEF"]
        );
        assert_eq!(
            parse_delimited_list("a|b, c", &[',', '|']),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_parse_delimited_list_empty() {
        assert!(parse_delimited_list("", &[',', '|']).is_empty());
        assert!(parse_delimited_list("   ", &[',', '|']).is_empty());
        assert!(parse_delimited_list(" | ", &['|']).is_empty());
    }

    #[test]
    fn test_parse_delimited_list_keeps_order_and_duplicates() {
        assert_eq!(
            parse_delimited_list("b|a|b", &['|']),
            vec!["b", "a", "b"]
        );
    }
}
