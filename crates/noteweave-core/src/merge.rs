// fold parsed templates into one note: first-write-wins keys, stable
// sequence union, bodies joined with a blank line

use crate::model::{Frontmatter, ParsedTemplate};
use serde_yaml::Value;

/// Merge templates in order into a single result.
///
/// Frontmatter keys are folded with [`merge_frontmatter`]; non-empty bodies
/// are concatenated in input order, separated by a blank line. Output
/// depends only on the input sequence.
pub fn merge_templates(templates: &[ParsedTemplate]) -> ParsedTemplate {
    let mut frontmatter = Frontmatter::new();
    let mut bodies: Vec<&str> = Vec::new();

    for tpl in templates {
        merge_frontmatter(&mut frontmatter, &tpl.frontmatter);
        let body = tpl.body.trim();
        if !body.is_empty() {
            bodies.push(body);
        }
    }

    ParsedTemplate {
        frontmatter,
        body: bodies.join("\n\n"),
    }
}

/// Fold `source` into `target` key by key.
///
/// A new key is inserted as-is. When both sides hold sequences, the result
/// is their concatenation deduplicated in first-occurrence order. Every
/// other conflict (scalar vs scalar, sequence vs scalar, mapping vs
/// anything) keeps the existing value; the incoming one is dropped without
/// an error.
pub fn merge_frontmatter(target: &mut Frontmatter, source: &Frontmatter) {
    for (key, value) in source {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), value.clone());
            }
            Some(Value::Sequence(existing)) => {
                if let Value::Sequence(incoming) = value {
                    let merged = dedup_concat(existing, incoming);
                    *existing = merged;
                }
            }
            Some(_) => {} // first write wins
        }
    }
}

/// Ordered-unique concatenation: walk both sequences, skip values already
/// collected. Linear scan instead of a hash set so first-occurrence order
/// never depends on set iteration.
fn dedup_concat(left: &[Value], right: &[Value]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::new();
    for item in left.iter().chain(right) {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template;

    fn tpl(raw: &str) -> ParsedTemplate {
        parse_template(raw)
    }

    #[test]
    fn test_merge_empty_input() {
        let merged = merge_templates(&[]);
        assert!(merged.frontmatter.is_empty());
        assert_eq!(merged.body, "");
    }

    #[test]
    fn test_sequence_union_is_order_stable() {
        let a = tpl("---\ntags: [a, b]\n---\n");
        let b = tpl("---\ntags: [b, c]\n---\n");
        let merged = merge_templates(&[a, b]);

        let tags: Vec<String> = merged.frontmatter["tags"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_existing_duplicates_are_collapsed() {
        let a = tpl("---\ntags: [a, a, b]\n---\n");
        let b = tpl("---\ntags: [c]\n---\n");
        let merged = merge_templates(&[a, b]);

        let tags = merged.frontmatter["tags"].as_sequence().unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_scalar_conflict_first_write_wins() {
        let a = tpl("---\ntitle: A\n---\n");
        let b = tpl("---\ntitle: B\n---\n");
        let merged = merge_templates(&[a, b]);
        assert_eq!(merged.frontmatter["title"].as_str(), Some("A"));
    }

    #[test]
    fn test_type_mismatch_keeps_existing() {
        let a = tpl("---\nx: scalar\n---\n");
        let b = tpl("---\nx: [1, 2]\n---\n");
        let merged = merge_templates(&[a, b]);
        assert_eq!(merged.frontmatter["x"].as_str(), Some("scalar"));
    }

    #[test]
    fn test_sequence_then_scalar_keeps_sequence() {
        let a = tpl("---\nx: [1, 2]\n---\n");
        let b = tpl("---\nx: scalar\n---\n");
        let merged = merge_templates(&[a, b]);
        assert_eq!(
            merged.frontmatter["x"].as_sequence().map(|s| s.len()),
            Some(2)
        );
    }

    #[test]
    fn test_disjoint_keys_all_survive() {
        let a = tpl("---\ntitle: Note\n---\n");
        let b = tpl("---\ntags: [x]\nstatus: draft\n---\n");
        let merged = merge_templates(&[a, b]);
        assert_eq!(merged.frontmatter.len(), 3);
    }

    #[test]
    fn test_bodies_join_with_blank_line_skipping_empty() {
        let templates = vec![
            ParsedTemplate {
                frontmatter: Frontmatter::new(),
                body: "First".to_string(),
            },
            ParsedTemplate::default(),
            ParsedTemplate {
                frontmatter: Frontmatter::new(),
                body: "Third".to_string(),
            },
        ];
        let merged = merge_templates(&templates);
        assert_eq!(merged.body, "First\n\nThird");
    }

    #[test]
    fn test_single_body_has_no_separator() {
        let merged = merge_templates(&[tpl("Only body")]);
        assert_eq!(merged.body, "Only body");
    }

    #[test]
    fn test_merge_is_order_sensitive_but_deterministic() {
        let a = tpl("---\ntitle: A\ntags: [one]\n---\nAlpha");
        let b = tpl("---\ntitle: B\ntags: [two]\n---\nBeta");

        let forward = merge_templates(&[a.clone(), b.clone()]);
        let backward = merge_templates(&[b.clone(), a.clone()]);
        assert_ne!(forward, backward);
        assert_eq!(forward.frontmatter["title"].as_str(), Some("A"));
        assert_eq!(backward.frontmatter["title"].as_str(), Some("B"));

        let again = merge_templates(&[a, b]);
        assert_eq!(forward, again);
    }
}
