use rs_readability::{extract_html, Metadata};

const URL: &str = "https://example.com/a/b";

const BODY: &str = r#"<div class="entry">
    <p>The harbour was quiet that morning, the boats tied up, and the gulls circling overhead.</p>
    <p>By noon, the fishermen had returned, carrying crates of mackerel, cod, and a single lobster.</p>
</div>"#;

fn meta_for(head: &str) -> Metadata {
    let html = format!("<html><head>{head}</head><body>{BODY}</body></html>");
    match extract_html(&html, URL) {
        Ok(article) => article.meta,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn author_from_first_author_meta() {
    let meta = meta_for(
        r#"<meta name="author" content="Ann Writer">
           <meta property="article:author" content="https://example.com/staff/ann">"#,
    );
    assert_eq!(meta.author, "Ann Writer");
}

#[test]
fn author_from_property_only() {
    let meta = meta_for(r#"<meta property="book:author" content="Someone Else">"#);
    assert_eq!(meta.author, "Someone Else");
}

#[test]
fn og_image_preferred_over_twitter_image() {
    let meta = meta_for(
        r#"<meta name="twitter:image" content="https://example.com/tw.jpg">
           <meta property="og:image" content="https://example.com/og.jpg">"#,
    );
    assert_eq!(meta.image, "https://example.com/og.jpg");
}

#[test]
fn twitter_image_used_when_no_og_image() {
    let meta = meta_for(r#"<meta name="twitter:image" content="//img.example.com/tw.jpg">"#);
    assert_eq!(meta.image, "http://img.example.com/tw.jpg");
}

#[test]
fn description_preferred_over_social_descriptions() {
    let meta = meta_for(
        r#"<meta property="og:description" content="From OG">
           <meta name="twitter:description" content="From Twitter">
           <meta name="description" content="Plain description">"#,
    );
    assert_eq!(meta.excerpt, "Plain description");
}

#[test]
fn og_description_before_twitter_description() {
    let meta = meta_for(
        r#"<meta name="twitter:description" content="From Twitter">
           <meta property="og:description" content="From OG">"#,
    );
    assert_eq!(meta.excerpt, "From OG");
}

#[test]
fn excerpt_defaults_to_first_paragraph() {
    let meta = meta_for("");
    assert_eq!(
        meta.excerpt,
        "The harbour was quiet that morning, the boats tied up, and the gulls circling overhead."
    );
}

#[test]
fn missing_fields_are_blank() {
    let meta = meta_for("");
    assert!(meta.author.is_empty());
    assert!(meta.image.is_empty());
    assert!(meta.title.is_empty());
}

#[test]
fn metadata_survives_missing_content() {
    let html = r#"<html><head>
        <title>A Page That Has No Real Article Body</title>
        <meta name="author" content="Ann Writer">
        <meta name="description" content="Nothing to read here.">
    </head><body><a href="/">Home</a></body></html>"#;
    let article = extract_html(html, URL).expect("missing content is not an error");

    assert!(article.content.is_empty());
    assert!(article.raw_content.is_empty());
    assert_eq!(article.meta.title, "A Page That Has No Real Article Body");
    assert_eq!(article.meta.author, "Ann Writer");
    assert_eq!(article.meta.excerpt, "Nothing to read here.");
    assert_eq!(article.meta.min_read_time, 0);
    assert_eq!(article.meta.max_read_time, 0);
}
