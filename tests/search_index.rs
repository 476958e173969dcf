use bloodref::{
    ChapterRecord, ContentSource, EmptyQueryPolicy, KeywordSearchIndex, Manifest, RangeEntry,
};

fn embedded_index() -> KeywordSearchIndex {
    KeywordSearchIndex::build(Manifest::embedded().unwrap())
}

fn ids(chapters: &[&ChapterRecord]) -> Vec<u32> {
    chapters.iter().map(|c| c.id).collect()
}

/// Every contiguous character substring of `text` that is not blank.
fn substrings(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            let s: String = chars[start..end].iter().collect();
            if !s.trim().is_empty() {
                out.push(s);
            }
        }
    }
    out
}

#[test]
fn every_title_substring_finds_its_chapter() {
    let manifest = Manifest::embedded().unwrap();
    let index = embedded_index();

    for chapter in manifest.chapters() {
        for s in substrings(&chapter.title) {
            let found = ids(&index.search(s.as_str()).chapters);
            assert!(
                found.contains(&chapter.id),
                "{s:?} did not find chapter {}",
                chapter.id
            );
        }
    }
}

#[test]
fn every_keyword_finds_its_chapter() {
    let manifest = Manifest::embedded().unwrap();
    let index = embedded_index();

    for chapter in manifest.chapters() {
        let keywords = manifest.keywords_for(chapter.id);
        assert!(!keywords.is_empty(), "chapter {} has no keywords", chapter.id);
        for keyword in keywords {
            let found = ids(&index.search(keyword.as_str()).chapters);
            assert!(found.contains(&chapter.id), "{keyword:?} missed chapter {}", chapter.id);
        }
    }
}

#[test]
fn empty_query_policies_differ() {
    let index = embedded_index();
    let all: Vec<u32> = index.chapters().map(|c| c.id).collect();

    for blank in ["", " ", "\t\n"] {
        assert!(index.search(blank).chapters.is_empty());
        assert!(index.search(blank).ranges.is_empty());
        assert_eq!(ids(&index.filter_chapters(blank)), all);
    }
    assert!(index.search(None::<&str>).is_empty());
    assert_eq!(ids(&index.filter_chapters(None::<&str>)), all);
    assert_eq!(all, (1..=13).collect::<Vec<_>>());
}

#[test]
fn explicit_policy_matches_named_variants() {
    let index = embedded_index();
    assert_eq!(index.filter("", EmptyQueryPolicy::ReturnNone), index.search(""));
    assert_eq!(
        index.filter("", EmptyQueryPolicy::ReturnAll).chapters,
        index.filter_chapters("")
    );
    assert_eq!(index.filter("iron", EmptyQueryPolicy::ReturnAll), index.search("iron"));
}

#[test]
fn query_case_does_not_matter() {
    let index = embedded_index();
    for (upper, lower) in [("IRON", "iron"), ("HaEmOgLoBiN", "haemoglobin"), ("EGFR", "egfr")] {
        assert_eq!(index.search(upper), index.search(lower));
    }
}

#[test]
fn repeated_queries_are_identical_and_ordered() {
    let index = embedded_index();
    let first = index.search("a");
    for _ in 0..3 {
        assert_eq!(index.search("a"), first);
    }

    let found = ids(&first.chapters);
    let mut sorted = found.clone();
    sorted.sort_unstable();
    assert_eq!(found, sorted);
}

#[test]
fn anaemia_finds_full_blood_count() {
    let index = embedded_index();
    let results = index.search("anaemia");
    assert!(ids(&results.chapters).contains(&1));
    assert_eq!(results.chapters[0].title, "Full Blood Count (FBC)");
}

#[test]
fn unknown_term_finds_nothing() {
    let index = embedded_index();
    let results = index.search("xyz-not-present");
    assert!(results.chapters.is_empty());
    assert!(results.ranges.is_empty());
}

#[test]
fn haemoglobin_finds_range_entries() {
    let index = embedded_index();
    let results = index.search("haemoglobin");

    assert!(results.ranges.contains(&&RangeEntry {
        category: "fbc".to_string(),
        test: "Haemoglobin (Male)".to_string(),
        range: "130-175 g/L".to_string(),
    }));
    assert!(results.ranges.iter().all(|r| r.category == "fbc"));
}

#[test]
fn ranges_match_on_test_name_only() {
    let index = embedded_index();
    assert!(index.search("mmol").ranges.is_empty());
    assert!(index.search("biochemistry").ranges.is_empty());
    assert_eq!(index.search("potass").ranges.len(), 1);
}

#[test]
fn chapters_come_before_ranges_in_hits() {
    let index = embedded_index();
    let hits = serde_json::to_value(index.search("urea").hits()).unwrap();
    let kinds: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["chapter", "range"]);
}

#[test]
fn custom_manifest_from_toml() {
    let manifest = Manifest::from_toml_str(
        r#"
version = 1

[[chapters]]
id = 1
title = "Full Blood Count (FBC)"
description = "Reading FBC results"
sections = []

[[chapters]]
id = 2
title = "Coagulation"
description = "Clotting screens"
sections = []

[keywords]
1 = ["Anaemia", " anaemia "]
9 = ["orphan"]

[[ranges]]
category = "fbc"
tests = [{ name = "Haemoglobin (Male)", range = "130-175 g/L" }]
"#,
    )
    .unwrap();

    assert_eq!(manifest.keywords_for(1), ["anaemia", " anaemia "]);
    assert!(manifest.keywords_for(2).is_empty());
    assert!(manifest.keywords_for(404).is_empty());

    let index = KeywordSearchIndex::build(&manifest);
    assert_eq!(ids(&index.search("ANAEMIA").chapters), vec![1]);
    assert!(index.search("orphan").chapters.is_empty());
    assert_eq!(index.search("haemoglobin").ranges[0].range, "130-175 g/L");
}

#[test]
fn invalid_manifests_are_rejected() {
    let duplicate = r#"
[[chapters]]
id = 3
title = "A"
description = "a"

[[chapters]]
id = 3
title = "B"
description = "b"
"#;
    assert!(Manifest::from_toml_str(duplicate).is_err());

    let zero = "[[chapters]]\nid = 0\ntitle = \"A\"\ndescription = \"a\"\n";
    assert!(Manifest::from_toml_str(zero).is_err());

    assert!(Manifest::from_toml_str("version = 2").is_err());
    assert!(Manifest::from_toml_str("[keywords]\nfbc = [\"x\"]").is_err());
}
