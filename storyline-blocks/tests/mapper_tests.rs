use pretty_assertions::assert_eq;
use serde_json::json;
use storyline_blocks::{
    ArticlesBlock, BigTextBlock, Block, BlockError, BlockExt, BlockMapper, HeroBlock, SectionBlock,
};
use storyline_model::Entity;
use storyline_resolve::RelationResolver;
use storyline_richtext::NodeKind;
use storyline_types::{ContentMap, DynamicValue};

fn dv(json: serde_json::Value) -> DynamicValue {
    DynamicValue::decode(&json).unwrap()
}

fn make_hero(uid: &str) -> serde_json::Value {
    json!({
        "_uid": uid,
        "component": "hero",
        "layout": "constrained",
        "headline": "Welcome"
    })
}

fn make_articles(component: &str, ids: &[&str]) -> serde_json::Value {
    json!({
        "_uid": "list-1",
        "component": component,
        "headline": "Popular",
        "articles": ids
    })
}

fn make_entity(id: &str, path: &str, title: &str) -> Entity {
    let content = ContentMap::decode(&dv(json!({
        "title": title,
        "teaser": format!("About {title}"),
        "image": {"id": 5, "filename": format!("{title}.png")}
    })))
    .unwrap();
    Entity::new(id, content, path)
}

// ── Hero ─────────────────────────────────────────────────────────

#[test]
fn hero_without_background_image() {
    let block = BlockMapper::new().map(&dv(make_hero("h1"))).unwrap();
    let Block::Hero(hero) = block else {
        panic!("expected hero, got {block:?}");
    };
    assert_eq!(hero.uid, "h1");
    assert_eq!(hero.headline, "Welcome");
    assert_eq!(hero.subheadline, None);
    assert_eq!(hero.background_image, None);
}

#[test]
fn hero_reads_background_image() {
    let mut raw = make_hero("h1");
    raw["background_image"] = json!({"id": 12, "filename": "bg.jpg", "alt": "sky"});
    let block = BlockMapper::new().map(&dv(raw)).unwrap();
    let hero = block.as_variant::<HeroBlock>().unwrap();
    assert_eq!(hero.background_image.as_ref().map(|a| a.id), Some(12));
}

#[test]
fn hero_missing_headline_fails() {
    let mut raw = make_hero("h1");
    raw.as_object_mut().unwrap().remove("headline");
    let err = BlockMapper::new().map(&dv(raw)).unwrap_err();
    match err {
        BlockError::Decode { component, source } => {
            assert_eq!(component, "hero");
            assert!(source.is_missing_field());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── Discriminator handling ───────────────────────────────────────

#[test]
fn unknown_component_is_rejected() {
    let err = BlockMapper::new()
        .map(&dv(json!({"_uid": "x", "component": "unknown_x"})))
        .unwrap_err();
    assert!(matches!(err, BlockError::UnknownDiscriminator(c) if c == "unknown_x"));
}

#[test]
fn missing_component_and_non_objects() {
    let mapper = BlockMapper::new();
    assert!(matches!(
        mapper.map(&dv(json!({"_uid": "x"}))),
        Err(BlockError::MissingDiscriminator)
    ));
    assert!(matches!(
        mapper.map(&dv(json!([1]))),
        Err(BlockError::NotAnObject { found: "array" })
    ));
}

#[test]
fn map_all_compacts_failures() {
    let values = vec![
        dv(make_hero("h1")),
        dv(json!({"_uid": "x", "component": "unknown_x"})),
        dv(json!("stray")),
        dv(json!({"_uid": "t1", "component": "big_text"})),
    ];
    let blocks = BlockMapper::new().map_all(&values);
    let uids: Vec<&str> = blocks.iter().map(Block::uid).collect();
    assert_eq!(uids, vec!["h1", "t1"]);
}

#[test]
fn as_block_helper() {
    assert_eq!(
        dv(make_hero("h1"))
            .as_block()
            .map(|b| b.component().to_string()),
        Some("hero".into())
    );
    assert_eq!(dv(json!({"component": "unknown_x"})).as_block(), None);
}

// ── Articles ─────────────────────────────────────────────────────

#[test]
fn articles_without_resolver_keep_ids() {
    let block = BlockMapper::new()
        .map(&dv(make_articles("all-articles", &["u1", "u2"])))
        .unwrap();
    let articles = block.as_variant::<ArticlesBlock>().unwrap();
    assert_eq!(articles.component, "all-articles");
    assert_eq!(articles.articles, vec!["u1", "u2"]);
    assert_eq!(articles.resolved_articles, None);
}

#[test]
fn articles_resolve_through_resolver() {
    let resolver = RelationResolver::new([
        make_entity("u1", "blogs/one", "One"),
        make_entity("u2", "blogs/two", "Two"),
    ]);
    let block = BlockMapper::with_resolver(&resolver)
        .map(&dv(make_articles("popular-articles", &["u2", "missing", "u1"])))
        .unwrap();

    let articles = block.as_variant::<ArticlesBlock>().unwrap();
    assert_eq!(articles.articles, vec!["u2", "missing", "u1"]);
    let cards = articles.resolved_articles.as_ref().unwrap();
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Two", "One"]);
    assert_eq!(cards[0].uuid, "u2");
    assert_eq!(cards[0].full_slug, "blogs/two");
    assert_eq!(cards[0].teaser, "About Two");
    assert_eq!(cards[0].image.as_ref().map(|a| a.filename.as_str()), Some("Two.png"));
}

#[test]
fn articles_require_article_list() {
    let err = BlockMapper::new()
        .map(&dv(json!({"_uid": "a", "component": "all-articles", "headline": "H"})))
        .unwrap_err();
    assert!(matches!(err, BlockError::Decode { .. }));
}

// ── Big text & sections ──────────────────────────────────────────

#[test]
fn big_text_parses_document() {
    let block = BlockMapper::new()
        .map(&dv(json!({
            "_uid": "t1",
            "component": "big_text",
            "text": {"type": "doc", "content": [
                {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Big"}]}
            ]}
        })))
        .unwrap();
    let text = block.as_variant::<BigTextBlock>().unwrap().text.as_ref().unwrap();
    assert_eq!(text[0].kind, NodeKind::Heading);
    assert_eq!(text[0].heading_level(), Some(2));
}

#[test]
fn section_compacts_children_and_resolves_nested_articles() {
    let resolver = RelationResolver::new([make_entity("u1", "blogs/one", "One")]);
    let block = BlockMapper::with_resolver(&resolver)
        .map(&dv(json!({
            "_uid": "s1",
            "component": "section",
            "headline": "More",
            "body": [
                make_articles("popular-articles", &["u1"]),
                {"component": "unknown_x"},
                make_hero("h2")
            ]
        })))
        .unwrap();

    let section = block.as_variant::<SectionBlock>().unwrap();
    assert_eq!(section.headline.as_deref(), Some("More"));
    assert_eq!(section.body.len(), 2);
    let nested = section.body[0].as_variant::<ArticlesBlock>().unwrap();
    assert_eq!(nested.resolved_articles.as_ref().map(Vec::len), Some(1));
}

#[test]
fn blocks_serialize_with_component() {
    let block = BlockMapper::new().map(&dv(make_hero("h1"))).unwrap();
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["component"], "hero");
    assert_eq!(json["uid"], "h1");
}
