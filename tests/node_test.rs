//! Integration tests for node navigation and derived fields.

use cxxgraph::{NodeCache, NodeKind, Record};

fn nested_corpus() -> NodeCache {
    NodeCache::from_records(vec![
        Record::new(NodeKind::Namespace, "_1").with_name("outer"),
        Record::new(NodeKind::Namespace, "_2")
            .with_name("inner")
            .with_context("_1"),
        Record::new(NodeKind::Class, "_3")
            .with_name("Widget")
            .with_context("_2")
            .with_attr("file", "f0"),
        Record::new(NodeKind::Function, "_4")
            .with_name("draw")
            .with_demangled("outer::inner::Widget::draw(int,int)")
            .with_context("_3")
            .with_attr("access", "private")
            .with_attr("const", "1"),
        Record::new(NodeKind::Variable, "_5")
            .with_name("count")
            .with_context("_3")
            .with_attr("access", "protected"),
        Record::new(NodeKind::File, "f0").with_name("widget.h"),
    ])
    .unwrap()
}

#[test]
fn test_qualified_name_of_root_node_is_its_name() {
    let cache = nested_corpus();
    let outer = cache.find_by_id("_1").unwrap();
    assert_eq!(outer.qualified_name(), "outer");
}

#[test]
fn test_qualified_name_walks_parent_chain() {
    let cache = nested_corpus();
    let widget = cache.find_by_id("_3").unwrap();
    assert_eq!(widget.qualified_name(), "outer::inner::Widget");
}

#[test]
fn test_demangled_truncates_at_parameter_list() {
    let cache = nested_corpus();
    let draw = cache.find_by_id("_4").unwrap();
    assert_eq!(draw.qualified_name(), "outer::inner::Widget::draw");
}

#[test]
fn test_qualified_name_and_parent_are_idempotent() {
    let cache = nested_corpus();
    let draw = cache.find_by_id("_4").unwrap();

    let first = draw.qualified_name().to_string();
    let second = draw.qualified_name().to_string();
    assert_eq!(first, second);

    assert_eq!(draw.parent(), draw.parent());
    assert_eq!(cache.node_count(), 6);
}

#[test]
fn test_parent_resolution() {
    let cache = nested_corpus();
    let inner = cache.find_by_id("_2").unwrap();
    assert_eq!(inner.parent().unwrap().name(), Some("outer"));
    assert!(inner.parent().unwrap().parent().is_none());
}

#[test]
fn test_dangling_context_soft_fails() {
    let cache = NodeCache::from_records(vec![Record::new(NodeKind::Class, "_1")
        .with_name("Orphan")
        .with_context("_404")])
    .unwrap();

    let orphan = cache.find_by_id("_1").unwrap();
    assert!(orphan.parent().is_none());
    assert_eq!(orphan.qualified_name(), "Orphan");
}

#[test]
fn test_qualified_name_stops_on_context_cycles() {
    // Ingestion accepts these records (ids are unique and every context
    // resolves); the walk must degrade instead of overflowing the stack.
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Class, "_1")
            .with_name("SelfScoped")
            .with_context("_1"),
        Record::new(NodeKind::Namespace, "_2")
            .with_name("A")
            .with_context("_3"),
        Record::new(NodeKind::Namespace, "_3")
            .with_name("B")
            .with_context("_2"),
        Record::new(NodeKind::Class, "_4")
            .with_name("Inner")
            .with_context("_2"),
    ])
    .unwrap();

    let self_scoped = cache.find_by_id("_1").unwrap();
    assert_eq!(self_scoped.qualified_name(), "SelfScoped");

    // Mutual cycle: A's walk reaches B, whose context points back at A, so
    // B acts as the root of the chain.
    assert_eq!(cache.find_by_id("_2").unwrap().qualified_name(), "B::A");
    assert_eq!(cache.find_by_id("_4").unwrap().qualified_name(), "B::A::Inner");
}

#[test]
fn test_file_resolves_to_file_node_name() {
    let cache = nested_corpus();
    let widget = cache.find_by_id("_3").unwrap();
    assert_eq!(widget.file(), Some("widget.h"));
}

#[test]
fn test_missing_or_dangling_file_is_none() {
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Class, "_1").with_name("NoFile"),
        Record::new(NodeKind::Class, "_2")
            .with_name("BadFile")
            .with_attr("file", "f404"),
    ])
    .unwrap();

    assert!(cache.find_by_id("_1").unwrap().file().is_none());
    assert!(cache.find_by_id("_2").unwrap().file().is_none());
}

#[test]
fn test_file_pointing_at_non_file_node_is_none() {
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Class, "_1")
            .with_name("Confused")
            .with_attr("file", "_2"),
        Record::new(NodeKind::Namespace, "_2").with_name("not_a_file"),
    ])
    .unwrap();

    assert!(cache.find_by_id("_1").unwrap().file().is_none());
}

#[test]
fn test_context_is_reachable_as_an_attribute() {
    let cache = nested_corpus();

    let widget = cache.find_by_id("_3").unwrap();
    assert_eq!(widget.attribute("context"), Some("_2"));
    assert_eq!(widget.attribute("context"), widget.context_id());

    // Root-scope nodes carry no context key at all.
    let outer = cache.find_by_id("_1").unwrap();
    assert_eq!(outer.attribute("context"), None);
}

#[test]
fn test_access_predicates() {
    let cache = nested_corpus();

    let draw = cache.find_by_id("_4").unwrap();
    assert!(draw.is_private());
    assert!(!draw.is_public());
    assert!(!draw.is_protected());
    assert!(draw.is_const());

    let count = cache.find_by_id("_5").unwrap();
    assert!(count.is_protected());
    assert!(!count.is_const());

    let secret = NodeCache::from_records(vec![Record::new(NodeKind::Variable, "_1")
        .with_name("secret")
        .with_attr("access", "private")])
    .unwrap();
    let secret = secret.find_by_id("_1").unwrap();
    assert!(secret.is_private());
    assert!(!secret.is_public());
    assert!(!secret.is_const());

    // Absent access defaults to public, absent const to false.
    let widget = cache.find_by_id("_3").unwrap();
    assert!(widget.is_public());
    assert!(!widget.is_const());
}

#[test]
fn test_attribute_lookup_passes_unknown_keys_through() {
    let cache = NodeCache::from_records(vec![Record::new(NodeKind::Function, "_1")
        .with_name("f")
        .with_attr("endline", "17")
        .with_attr("mangled", "_Z1fv")])
    .unwrap();

    let f = cache.find_by_id("_1").unwrap();
    assert_eq!(f.attribute("endline"), Some("17"));
    assert_eq!(f.attribute("mangled"), Some("_Z1fv"));
    assert_eq!(f.attribute("nonexistent"), None);
}

#[test]
fn test_base_type_is_identity_for_non_typedefs() {
    let cache = nested_corpus();
    let widget = cache.find_by_id("_3").unwrap();
    assert_eq!(widget.base_type(), widget);
}

#[test]
fn test_base_type_sees_through_typedef_chains() {
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Class, "_1").with_name("Real"),
        Record::new(NodeKind::Typedef, "_2")
            .with_name("Alias")
            .with_attr("type", "_1"),
        Record::new(NodeKind::Typedef, "_3")
            .with_name("AliasOfAlias")
            .with_attr("type", "_2"),
    ])
    .unwrap();

    let deep = cache.find_by_id("_3").unwrap();
    assert_eq!(deep.base_type().name(), Some("Real"));
    assert_eq!(deep.base_type().kind(), &NodeKind::Class);
}

#[test]
fn test_base_type_stops_on_dangling_or_cyclic_reference() {
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Typedef, "_1")
            .with_name("Dangling")
            .with_attr("type", "_404"),
        Record::new(NodeKind::Typedef, "_2")
            .with_name("SelfLoop")
            .with_attr("type", "_2"),
    ])
    .unwrap();

    let dangling = cache.find_by_id("_1").unwrap();
    assert_eq!(dangling.base_type(), dangling);

    let looped = cache.find_by_id("_2").unwrap();
    assert_eq!(looped.base_type(), looped);
}

#[test]
fn test_render() {
    let cache = nested_corpus();
    let widget = cache.find_by_id("_3").unwrap();
    assert_eq!(widget.render(true), "outer::inner::Widget");
    assert_eq!(widget.render(false), "Widget");
}

#[test]
fn test_anonymous_node_qualified_name() {
    let cache = NodeCache::from_records(vec![
        Record::new(NodeKind::Namespace, "_1").with_name("N"),
        Record::new(NodeKind::Struct, "_2").with_context("_1"),
    ])
    .unwrap();

    let anon = cache.find_by_id("_2").unwrap();
    assert_eq!(anon.name(), None);
    assert_eq!(anon.qualified_name(), "N::");
}
