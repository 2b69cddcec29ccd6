/// # text search over a fixed set of fields
/// a record matches a query when the query is a case-insensitive substring
/// of any of its search fields. the empty query matches every record.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        matches_lowercase(self, &query)
    }
}

fn matches_lowercase<T: Searchable + ?Sized>(item: &T, lowercase_query: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_query))
}

/// # filter by query
/// keep the records matching `query`, in their original order.
///
/// ## Arguments
/// * `items` - the records to filter
/// * `query` - free text, no tokenization or fuzzy matching
///
/// ## Returns
/// * `Vec<&T>` - the matching records, empty when nothing matches
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowercase(*item, &query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row("Lewis Hamilton", "British"),
            Row("Charles Leclerc", "Monégasque"),
            Row("Max Verstappen", "Dutch"),
        ]
    }

    #[test]
    fn any_field_can_match() {
        let rows = rows();
        let names: Vec<&str> = filter_by_query(&rows, "dutch").iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["Max Verstappen"]);
    }

    #[test]
    fn lowercasing_is_unicode_aware() {
        let rows = rows();
        assert_eq!(filter_by_query(&rows, "MONÉGASQUE").len(), 1);
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let rows = rows();
        let names: Vec<&str> = filter_by_query(&rows, "").iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["Lewis Hamilton", "Charles Leclerc", "Max Verstappen"]);
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(!Row("Lewis Hamilton", "British").matches_query("hamliton"));
        assert!(!Row("Lewis Hamilton", "British").matches_query("lewis  hamilton"));
        assert!(Row("Lewis Hamilton", "British").matches_query("S HAM"));
    }
}
