use crate::validation::repolink::extract;

#[test]
fn extracts_owner_and_name_from_a_plain_link() {
    let refs = extract("See https://github.com/acme/widget for details.");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].owner, "acme");
    assert_eq!(refs[0].name, "widget");
    assert_eq!(refs[0].url, "https://github.com/acme/widget");
}

#[test]
fn accepts_the_www_form() {
    let refs = extract("https://www.github.com/acme/widget");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].slug(), "acme/widget");
}

#[test]
fn preserves_first_seen_order_without_deduplication() {
    let text = "first https://github.com/a/one then https://github.com/b/two \
                and again https://github.com/a/one";
    let refs = extract(text);
    let slugs: Vec<String> = refs.iter().map(|r| r.slug()).collect();
    assert_eq!(slugs, ["a/one", "b/two", "a/one"]);
}

#[test]
fn deeper_paths_still_yield_the_repository() {
    let refs = extract("https://github.com/acme/widget/tree/main/src");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].slug(), "acme/widget");
}

#[test]
fn trailing_punctuation_is_not_part_of_the_name() {
    let refs = extract("Our repo (https://github.com/acme/widget).");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "widget");
}

#[test]
fn malformed_urls_do_not_match() {
    assert!(extract("github.com/acme/widget has no scheme").is_empty());
    assert!(extract("https://github.com/ac me/widget").is_empty());
    assert!(extract("https://gitlab.com/acme/widget").is_empty());
    assert!(extract("").is_empty());
}
