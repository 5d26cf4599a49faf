//! Catalog search and pagination.

use quiz_core::entities::Quiz;
use serde::Serialize;

/// Quizzes whose title, description, or category contain `term`,
/// case-insensitively. A blank term matches everything.
#[must_use]
pub fn search<'a>(quizzes: &'a [Quiz], term: &str) -> Vec<&'a Quiz> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return quizzes.iter().collect();
    }
    quizzes
        .iter()
        .filter(|q| {
            q.title.to_lowercase().contains(&needle)
                || q.description.to_lowercase().contains(&needle)
                || q.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually returned.
    pub page: usize,
    /// At least 1, even when there are no items.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into pages of `page_size` and return page `page` (1-based).
/// Out-of-range pages clamp to the first or last page.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn quiz(id: &str, title: &str, description: &str, category: &str) -> Quiz {
        Quiz {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            time_limit: None,
            questions: Vec::new(),
        }
    }

    fn catalog() -> Vec<Quiz> {
        vec![
            quiz("1", "World Capitals", "Cities of the world", "Geography"),
            quiz("2", "Rust Basics", "Ownership and borrowing", "Programming"),
            quiz("3", "Rivers", "Longest rivers", "geography"),
        ]
    }

    #[rstest]
    #[case("", &["1", "2", "3"])]
    #[case("GEOGRAPHY", &["1", "3"])]
    #[case("borrow", &["2"])]
    #[case("capitals", &["1"])]
    #[case("nothing", &[])]
    fn search_matches_fields(#[case] term: &str, #[case] expected: &[&str]) {
        let quizzes = catalog();
        let ids: Vec<&str> = search(&quizzes, term).iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    #[case(13, 1, 6, 1, 3, 6)]
    #[case(13, 3, 6, 3, 3, 1)]
    #[case(13, 9, 6, 3, 3, 1)]
    #[case(13, 0, 6, 1, 3, 6)]
    #[case(12, 2, 6, 2, 2, 6)]
    #[case(0, 1, 6, 1, 1, 0)]
    fn pagination(
        #[case] count: usize,
        #[case] requested: usize,
        #[case] size: usize,
        #[case] page: usize,
        #[case] total_pages: usize,
        #[case] on_page: usize,
    ) {
        let result = paginate((0..count).collect::<Vec<_>>(), requested, size);
        assert_eq!(result.page, page);
        assert_eq!(result.total_pages, total_pages);
        assert_eq!(result.items.len(), on_page);
        assert_eq!(result.total_items, count);
    }

    #[test]
    fn second_page_starts_after_first() {
        let result = paginate((1..=8).collect::<Vec<_>>(), 2, 6);
        assert_eq!(result.items, vec![7, 8]);
    }
}
