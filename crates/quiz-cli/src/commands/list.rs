use anyhow::Context;
use quiz_author::{paginate, search};
use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;
use serde::Serialize;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{hint, output};

/// Catalog row. Never carries questions or answers.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QuizRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub questions: usize,
    pub time_limit: String,
}

impl From<&Quiz> for QuizRow {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            category: quiz.category.clone(),
            questions: quiz.question_count(),
            time_limit: describe_time_limit(quiz.time_limit),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListResponse {
    page: usize,
    total_pages: usize,
    total_items: usize,
    quizzes: Vec<QuizRow>,
}

pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let quizzes = ctx.store.list().await.context("failed to list quizzes")?;
    let response = build_listing(
        &quizzes,
        args.search.as_deref().unwrap_or_default(),
        usize::try_from(args.page).unwrap_or(1),
        ctx.config.catalog.page_size,
    );

    if flags.format == OutputFormat::Table {
        output(&response.quizzes, flags)?;
        hint(
            flags,
            format!(
                "page {}/{} ({} quizzes)",
                response.page, response.total_pages, response.total_items
            ),
        );
        Ok(())
    } else {
        output(&response, flags)
    }
}

fn build_listing(quizzes: &[Quiz], term: &str, page: usize, page_size: usize) -> ListResponse {
    let page = paginate(search(quizzes, term), page, page_size);
    ListResponse {
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        quizzes: page.items.into_iter().map(QuizRow::from).collect(),
    }
}

pub fn describe_time_limit(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => format!("{minutes} min"),
        _ => String::from("none"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn quiz(id: &str, title: &str, category: &str) -> Quiz {
        Quiz {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            time_limit: None,
            questions: Vec::new(),
        }
    }

    fn catalog() -> Vec<Quiz> {
        (1..=8)
            .map(|n| {
                let category = if n % 2 == 0 { "Geography" } else { "History" };
                quiz(&format!("q{n}"), &format!("Quiz {n}"), category)
            })
            .collect()
    }

    #[test]
    fn first_page_uses_page_size() {
        let listing = build_listing(&catalog(), "", 1, 6);
        assert_eq!(listing.quizzes.len(), 6);
        assert_eq!(listing.total_pages, 2);
        assert_eq!(listing.total_items, 8);
    }

    #[test]
    fn search_narrows_before_paging() {
        let listing = build_listing(&catalog(), "geo", 1, 6);
        let ids: Vec<&str> = listing.quizzes.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["q2", "q4", "q6", "q8"]);
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let listing = build_listing(&catalog(), "", 9, 6);
        assert_eq!(listing.page, 2);
        assert_eq!(listing.quizzes.len(), 2);
    }

    #[test]
    fn rows_describe_time_limit() {
        let mut timed = quiz("t", "Timed", "General");
        timed.time_limit = Some(5);
        assert_eq!(QuizRow::from(&timed).time_limit, "5 min");
        assert_eq!(describe_time_limit(Some(0)), "none");
        assert_eq!(describe_time_limit(None), "none");
    }
}
