//! Supplementary data: recent news about the company, offered to the operator for inclusion.

use tracing::{info, warn};

use crate::console::{confirm, Console};
use crate::errors::AppError;
use crate::models::SupplementaryItem;
use crate::search::{NewsSearch, SearchQuery};

const NEWS_ENGINE: &str = "google_news";
const RESULT_COUNT_HINT: u32 = 3;
const MAX_ITEMS: usize = 2;

/// Looks up news for `company_name` and `topic`.
///
/// Takes at most the first two results. An empty result list or any provider
/// failure yields the two placeholder items instead; this never fails.
pub async fn find_supplementary_items(
    search: &dyn NewsSearch,
    company_name: &str,
    topic: &str,
) -> Vec<SupplementaryItem> {
    let query = SearchQuery {
        engine: NEWS_ENGINE.to_string(),
        q: format!("{company_name} {topic}"),
        num: RESULT_COUNT_HINT,
    };

    let items: Vec<SupplementaryItem> = match search.search_news(&query).await {
        Ok(results) => results
            .into_iter()
            .take(MAX_ITEMS)
            .map(|r| SupplementaryItem {
                title: r.title,
                source: r.source,
            })
            .collect(),
        Err(e) => {
            warn!("News search failed, using placeholder items: {e}");
            Vec::new()
        }
    };

    if items.is_empty() {
        info!("No news results for {:?}; using placeholders", query.q);
        return placeholder_items(company_name);
    }
    items
}

fn placeholder_items(company_name: &str) -> Vec<SupplementaryItem> {
    vec![
        SupplementaryItem {
            title: format!("{company_name} is gaining significant attention in the global market."),
            source: "Example News".to_string(),
        },
        SupplementaryItem {
            title: format!("New innovation drives data innovation at {company_name}."),
            source: "Tech Daily".to_string(),
        },
    ]
}

/// Finds supplementary items, shows them, and returns them only if the operator opts in.
pub async fn search_supplementary_data(
    console: &mut dyn Console,
    search: &dyn NewsSearch,
    company_name: &str,
    topic: &str,
) -> Result<Vec<SupplementaryItem>, AppError> {
    console.say("\n[Supplementary Data Collection]\n");
    console.say(&format!(
        "Searching for latest news about {company_name} and {topic}..."
    ));

    let items = find_supplementary_items(search, company_name, topic).await;

    console.say("\n[Supplementary Data Summary]");
    for item in &items {
        console.say(&format!("\"{}\" (Source: {})", item.title, item.source));
    }

    if confirm(
        console,
        "\nDo you want to include this supplementary data in the Press Kit? (Y/N): ",
    )
    .await?
    {
        Ok(items)
    } else {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{news, ScriptedConsole, StaticSearch};

    #[tokio::test]
    async fn test_empty_results_yield_two_placeholders_naming_the_company() {
        let search = StaticSearch::returning(vec![]);
        let items = find_supplementary_items(&search, "Acme", "New Product").await;
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].title,
            "Acme is gaining significant attention in the global market."
        );
        assert_eq!(items[0].source, "Example News");
        assert_eq!(
            items[1].title,
            "New innovation drives data innovation at Acme."
        );
        assert_eq!(items[1].source, "Tech Daily");
    }

    #[tokio::test]
    async fn test_provider_failure_is_treated_like_no_results() {
        let search = StaticSearch::failing(500);
        let items = find_supplementary_items(&search, "Acme", "New Product").await;
        assert_eq!(items, placeholder_items("Acme"));
    }

    #[tokio::test]
    async fn test_only_first_two_results_are_kept_verbatim() {
        let search = StaticSearch::returning(vec![
            news("  First headline ", "Wire"),
            news("Second headline", "Daily"),
            news("Third headline", "Weekly"),
        ]);
        let items = find_supplementary_items(&search, "Acme", "New Product").await;
        assert_eq!(
            items,
            vec![
                SupplementaryItem {
                    title: "  First headline ".to_string(),
                    source: "Wire".to_string()
                },
                SupplementaryItem {
                    title: "Second headline".to_string(),
                    source: "Daily".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_single_result_is_not_padded() {
        let search = StaticSearch::returning(vec![news("Only one", "Wire")]);
        let items = find_supplementary_items(&search, "Acme", "Launch").await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Only one");
    }

    #[tokio::test]
    async fn test_query_combines_company_and_topic() {
        let search = StaticSearch::returning(vec![]);
        find_supplementary_items(&search, "Acme", "New Product").await;
        let queries = search.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].engine, "google_news");
        assert_eq!(queries[0].q, "Acme New Product");
        assert_eq!(queries[0].num, 3);
    }

    #[tokio::test]
    async fn test_declined_opt_in_returns_nothing() {
        let search = StaticSearch::returning(vec![news("Headline", "Wire")]);
        let mut console = ScriptedConsole::new(["n"]);
        let items = search_supplementary_data(&mut console, &search, "Acme", "Launch")
            .await
            .unwrap();
        assert!(items.is_empty());
        assert!(console.printed("\"Headline\" (Source: Wire)"));
    }

    #[tokio::test]
    async fn test_accepted_opt_in_returns_items() {
        let search = StaticSearch::returning(vec![]);
        let mut console = ScriptedConsole::new(["Y"]);
        let items = search_supplementary_data(&mut console, &search, "Acme", "Launch")
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }
}
