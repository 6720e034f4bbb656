use std::{collections::BTreeMap, time::Duration};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::menu::{
    entities::MenuItem,
    errors::ResolutionFailure,
    extraction::{ReplyShape, coerce_ids, parse_model_reply},
    ports::{LLMClient, MenuItemRepository},
    prompt::{build_menu_context, build_search_prompt},
    schema::get_menu_search_schema,
    value_objects::{ResolutionSource, ResolvedSelection, SearchResult, SelectionLine},
};

/// Resolves a free-text menu question against a catalog snapshot.
///
/// Makes a single language-model call bounded by `timeout`. Any failure on
/// that path (gateway error, timeout, unparsable reply, failed id lookup)
/// degrades to [`fallback_search`] over `snapshot`.
pub async fn resolve_menu_query<L, M>(
    llm_client: &L,
    catalog: &M,
    query: &str,
    snapshot: &[MenuItem],
    timeout: Duration,
) -> SearchResult
where
    L: LLMClient,
    M: MenuItemRepository,
{
    match resolve_with_model(llm_client, catalog, query, snapshot, timeout).await {
        Ok(result) => result,
        Err(failure) => {
            warn!(%failure, "menu search falling back to substring match");
            fallback_search(query, snapshot, &failure)
        }
    }
}

async fn resolve_with_model<L, M>(
    llm_client: &L,
    catalog: &M,
    query: &str,
    snapshot: &[MenuItem],
    timeout: Duration,
) -> Result<SearchResult, ResolutionFailure>
where
    L: LLMClient,
    M: MenuItemRepository,
{
    let prompt = build_search_prompt(&build_menu_context(snapshot), query);

    let raw_response = tokio::time::timeout(
        timeout,
        llm_client.generate_with_text(prompt, get_menu_search_schema()),
    )
    .await
    .map_err(|_| ResolutionFailure::GatewayTimeout(timeout))?
    .map_err(|e| ResolutionFailure::GatewayUnavailable(e.to_string()))?;

    debug!(reply = %raw_response, "language model reply");

    let reply = parse_model_reply(raw_response.trim())?;
    let ids = coerce_ids(&reply.ids);

    let items = if ids.is_empty() {
        Vec::new()
    } else {
        catalog
            .find_by_ids(ids.clone())
            .await
            .map_err(|e| ResolutionFailure::CatalogLookup(e.to_string()))?
    };

    let source = match reply.shape {
        ReplyShape::Object => ResolutionSource::Model,
        ReplyShape::IdList => ResolutionSource::IdList,
    };

    Ok(SearchResult {
        selection: build_selection(&ids, &items),
        items,
        answer: reply.answer,
        source,
    })
}

/// Case-insensitive substring search of `query` over item names and descriptions.
/// The answer always carries the failure that led here.
pub fn fallback_search(
    query: &str,
    snapshot: &[MenuItem],
    failure: &ResolutionFailure,
) -> SearchResult {
    let needle = query.trim().to_lowercase();

    let items: Vec<MenuItem> = if needle.is_empty() {
        Vec::new()
    } else {
        snapshot
            .iter()
            .filter(|item| item.mentions(&needle))
            .cloned()
            .collect()
    };

    let answer = if items.is_empty() {
        format!(
            "Sorry, I couldn't find anything on the menu for \"{}\". AI Error: {}",
            query.trim(),
            failure
        )
    } else {
        format!("AI Error: {}", failure)
    };

    SearchResult {
        items,
        answer,
        source: ResolutionSource::Fallback,
        selection: ResolvedSelection::default(),
    }
}

/// Prices the selection from catalog rows. The quantity of an item is the
/// number of times its id appears in `ids`; ids with no row are ignored.
pub fn build_selection(ids: &[i32], items: &[MenuItem]) -> ResolvedSelection {
    let mut quantities: BTreeMap<i32, u32> = BTreeMap::new();
    for id in ids {
        *quantities.entry(*id).or_default() += 1;
    }

    let lines: Vec<SelectionLine> = items
        .iter()
        .filter_map(|item| {
            let quantity = *quantities.get(&item.id)?;
            Some(SelectionLine {
                item_id: item.id,
                name: item.name.clone(),
                quantity,
                unit_price: item.price,
                line_total: item.price * Decimal::from(quantity),
            })
        })
        .collect();

    let total = lines.iter().map(|line| line.line_total).sum();

    ResolvedSelection { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        menu::ports::{MockLLMClient, MockMenuItemRepository},
    };

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn item(id: i32, name: &str, description: &str, pence: i64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            price: Decimal::new(pence, 2),
            category: Some("Breakfast".to_string()),
            dietary_tags: None,
            prep_time: None,
            safety_alerts: None,
            may_contain: None,
            ingredients: vec![],
        }
    }

    fn catalog() -> Vec<MenuItem> {
        vec![
            item(1, "Full English Breakfast", "2 pork sausages, 2 bacon, toast.", 1295),
            item(2, "Vegan Breakfast", "Vegan sausage, hash browns, toast.", 1250),
            item(3, "Chips", "Thick cut chips.", 450),
        ]
    }

    fn llm_replying(reply: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _| Box::pin(async move { Ok(reply.to_string()) }));
        llm
    }

    fn llm_failing(error: CoreError) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _| {
                let error = error.clone();
                Box::pin(async move { Err(error) })
            });
        llm
    }

    /// Catalog lookup backed by the in-memory snapshot.
    fn repository_over(items: Vec<MenuItem>) -> MockMenuItemRepository {
        let mut repository = MockMenuItemRepository::new();
        repository.expect_find_by_ids().returning(move |ids| {
            let found: Vec<MenuItem> = items
                .iter()
                .filter(|item| ids.contains(&item.id))
                .cloned()
                .collect();
            Box::pin(async move { Ok(found) })
        });
        repository
    }

    fn ids_of(items: &[MenuItem]) -> Vec<i32> {
        let mut ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn test_well_formed_reply_returns_items_and_answer() {
        let llm = llm_replying(r#"{"ids": [3, 1], "answer": "1 x Chips @ £4.50 = £4.50"}"#);
        let repository = repository_over(catalog());

        let result =
            resolve_menu_query(&llm, &repository, "chips and a fry up", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![1, 3]);
        assert_eq!(result.answer, "1 x Chips @ £4.50 = £4.50");
        assert_eq!(result.source, ResolutionSource::Model);
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolve_to_one_row_with_quantity() {
        let reply = "Sure! {\"ids\":[1,1,1], \"answer\":\"3 x Full English Breakfast @ £12.95 = £38.85\\n\\nTotal: £38.85\"}";
        let llm = llm_replying(reply);
        let repository = repository_over(vec![item(1, "Full English Breakfast", "fry up", 1295)]);

        let result = resolve_menu_query(
            &llm,
            &repository,
            "3 breakfasts",
            &[item(1, "Full English Breakfast", "fry up", 1295)],
            TIMEOUT,
        )
        .await;

        assert_eq!(ids_of(&result.items), vec![1]);
        assert_eq!(
            result.answer,
            "3 x Full English Breakfast @ £12.95 = £38.85\n\nTotal: £38.85"
        );
        assert_eq!(result.selection.lines.len(), 1);
        assert_eq!(result.selection.lines[0].quantity, 3);
        assert_eq!(result.selection.lines[0].line_total, Decimal::new(3885, 2));
        assert_eq!(result.selection.total, Decimal::new(3885, 2));
    }

    #[tokio::test]
    async fn test_bare_id_list_uses_generic_answer() {
        let llm = llm_replying("[2, 3]");
        let repository = repository_over(catalog());

        let result = resolve_menu_query(&llm, &repository, "vegan", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![2, 3]);
        assert_eq!(result.answer, "Here are some suggestions.");
        assert_eq!(result.source, ResolutionSource::IdList);
    }

    #[tokio::test]
    async fn test_invalid_and_unknown_ids_are_dropped() {
        let llm = llm_replying(r#"{"ids": [1, "2", "abc", 42, null], "answer": "two"}"#);
        let repository = repository_over(catalog());

        let result = resolve_menu_query(&llm, &repository, "breakfast", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![1, 2]);
        assert_eq!(result.answer, "two");
        assert_eq!(result.selection.lines.len(), 2);
        assert_eq!(result.selection.total, Decimal::new(2545, 2));
    }

    #[tokio::test]
    async fn test_empty_ids_skip_lookup_and_keep_answer() {
        let llm = llm_replying(r#"{"ids": [], "answer": "How many people are eating?"}"#);
        let mut repository = MockMenuItemRepository::new();
        repository.expect_find_by_ids().never();

        let result = resolve_menu_query(&llm, &repository, "food", &catalog(), TIMEOUT).await;

        assert!(result.items.is_empty());
        assert_eq!(result.answer, "How many people are eating?");
        assert_eq!(result.source, ResolutionSource::Model);
    }

    #[tokio::test]
    async fn test_gateway_error_falls_back_to_substring_search() {
        let llm = llm_failing(CoreError::ExternalServiceError("connection refused".into()));
        let mut repository = MockMenuItemRepository::new();
        repository.expect_find_by_ids().never();

        let result = resolve_menu_query(&llm, &repository, "BREAKFAST", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![1, 2]);
        assert!(result.answer.contains("Error"));
        assert!(result.answer.contains("connection refused"));
        assert_eq!(result.source, ResolutionSource::Fallback);
        assert!(result.selection.lines.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_timeout_falls_back() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok("{}".to_string())
            })
        });
        let repository = MockMenuItemRepository::new();
        let snapshot = vec![item(1, "Full English Breakfast", "fry up", 1295)];

        let result = resolve_menu_query(
            &llm,
            &repository,
            "breakfast",
            &snapshot,
            Duration::from_millis(20),
        )
        .await;

        assert_eq!(ids_of(&result.items), vec![1]);
        assert!(result.answer.contains("Error"));
        assert!(result.answer.contains("timed out"));
    }

    #[tokio::test]
    async fn test_unparsable_reply_without_match_apologises() {
        let llm = llm_replying("I'm not sure what you mean.");
        let repository = MockMenuItemRepository::new();

        let result =
            resolve_menu_query(&llm, &repository, "sushi platter", &catalog(), TIMEOUT).await;

        assert!(result.items.is_empty());
        assert!(result.answer.starts_with("Sorry"));
        assert!(result.answer.contains("AI Error: malformed model output"));
    }

    #[tokio::test]
    async fn test_failed_lookup_falls_back() {
        let llm = llm_replying(r#"{"ids": [3], "answer": "Chips"}"#);
        let mut repository = MockMenuItemRepository::new();
        repository
            .expect_find_by_ids()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = resolve_menu_query(&llm, &repository, "chips", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![3]);
        assert!(result.answer.contains("menu lookup failed"));
        assert_eq!(result.source, ResolutionSource::Fallback);
    }

    #[tokio::test]
    async fn test_prompt_is_grounded_in_catalog() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("\"name\":\"Vegan Breakfast\"")
                    && prompt.contains("\"one vegan\"")
                    && schema["required"] == serde_json::json!(["ids", "answer"])
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(r#"{"ids": [], "answer": ""}"#.to_string()) }));
        let repository = MockMenuItemRepository::new();

        let result = resolve_menu_query(&llm, &repository, "one vegan", &catalog(), TIMEOUT).await;

        assert!(result.items.is_empty());
        assert_eq!(result.answer, "");
    }

    #[test]
    fn test_fallback_blank_query_matches_nothing() {
        let failure = ResolutionFailure::GatewayUnavailable("down".into());
        let result = fallback_search("   ", &catalog(), &failure);
        assert!(result.items.is_empty());
        assert!(!result.answer.is_empty());
    }

    #[test]
    fn test_fallback_matches_description() {
        let failure = ResolutionFailure::GatewayUnavailable("down".into());
        let result = fallback_search("hash brown", &catalog(), &failure);
        assert_eq!(ids_of(&result.items), vec![2]);
        assert_eq!(result.answer, "AI Error: language model unavailable: down");
    }

    #[test]
    fn test_fallback_ignores_surrounding_whitespace() {
        let failure = ResolutionFailure::GatewayUnavailable("down".into());
        let result = fallback_search("fast ", &catalog(), &failure);
        assert_eq!(ids_of(&result.items), vec![1, 2]);
        assert_eq!(result.answer, "AI Error: language model unavailable: down");
    }

    #[tokio::test]
    async fn test_single_id_for_multiple_units_keeps_quantity_one() {
        let llm = llm_replying(
            r#"{"ids": [1], "answer": "3 x Full English Breakfast @ £12.95 = £38.85\n\nTotal: £38.85"}"#,
        );
        let repository = repository_over(catalog());

        let result =
            resolve_menu_query(&llm, &repository, "3 breakfasts", &catalog(), TIMEOUT).await;

        assert_eq!(ids_of(&result.items), vec![1]);
        assert!(result.answer.starts_with("3 x Full English Breakfast"));
        assert_eq!(result.selection.lines.len(), 1);
        assert_eq!(result.selection.lines[0].quantity, 1);
        assert_eq!(result.selection.total, Decimal::new(1295, 2));
    }

    #[test]
    fn test_selection_ignores_ids_without_rows() {
        let selection = build_selection(&[1, 2, 2, 99], &catalog()[..2]);
        assert_eq!(selection.lines.len(), 2);
        assert_eq!(selection.lines[1].quantity, 2);
        assert_eq!(selection.lines[1].line_total, Decimal::new(2500, 2));
        assert_eq!(selection.total, Decimal::new(3795, 2));
    }
}
