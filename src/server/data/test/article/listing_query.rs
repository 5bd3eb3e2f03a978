use sea_orm::{DbBackend, QueryTrait};

use super::*;

fn postgres_sql(params: &ArticleListingParams) -> sea_orm::Statement {
    ArticleRepository::listing_query(params).build(DbBackend::Postgres)
}

#[test]
fn counts_comments_through_left_join() {
    let stmt = postgres_sql(&ArticleListingParams::default());

    assert!(stmt.sql.contains("COUNT(\"comments\".\"comment_id\") AS \"comment_count\""));
    assert!(stmt.sql.contains("LEFT JOIN \"comments\""));
    assert!(stmt.sql.contains("GROUP BY \"articles\".\"article_id\""));
    assert!(!stmt.sql.contains("\"body\""));
}

#[test]
fn orders_by_whitelisted_column() {
    let stmt = postgres_sql(&ArticleListingParams {
        sort_by: SortColumn::Votes,
        order: SortOrder::Asc,
        topic: None,
    });

    assert!(stmt
        .sql
        .contains("ORDER BY \"articles\".\"votes\" ASC, \"articles\".\"article_id\" ASC"));
}

/// Ties are broken by ascending `article_id` whatever the requested direction.
#[test]
fn breaks_ties_ascending_when_descending() {
    let stmt = postgres_sql(&ArticleListingParams {
        sort_by: SortColumn::Title,
        order: SortOrder::Desc,
        topic: None,
    });

    assert!(stmt
        .sql
        .contains("ORDER BY \"articles\".\"title\" DESC, \"articles\".\"article_id\" ASC"));
}

#[test]
fn orders_by_aggregate_alias() {
    let stmt = postgres_sql(&ArticleListingParams {
        sort_by: SortColumn::CommentCount,
        order: SortOrder::Desc,
        topic: None,
    });

    assert!(stmt.sql.contains("ORDER BY \"comment_count\" DESC"));
}

#[test]
fn omits_tie_breaker_when_sorting_by_article_id() {
    let stmt = postgres_sql(&ArticleListingParams {
        sort_by: SortColumn::ArticleId,
        order: SortOrder::Desc,
        topic: None,
    });

    assert!(stmt.sql.ends_with("ORDER BY \"articles\".\"article_id\" DESC"));
}

#[test]
fn binds_topic_as_parameter() {
    let stmt = postgres_sql(&ArticleListingParams {
        topic: Some("cats'; DROP TABLE articles; --".to_string()),
        ..Default::default()
    });

    assert!(stmt.sql.contains("WHERE \"articles\".\"topic\" = $1"));
    assert!(!stmt.sql.contains("DROP TABLE"));
    assert_eq!(stmt.values.map(|values| values.0.len()), Some(1));
}

#[test]
fn has_no_where_clause_without_topic() {
    let stmt = postgres_sql(&ArticleListingParams::default());

    assert!(!stmt.sql.contains("WHERE"));
    assert!(stmt.values.map_or(true, |values| values.0.is_empty()));
}
