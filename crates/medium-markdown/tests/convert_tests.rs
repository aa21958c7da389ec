use chrono::NaiveDate;
use medium_markdown::{ConversionOptions, ConvertError, Fetch, Offline, convert_html};
use rstest::rstest;
use std::cell::RefCell;
use std::collections::HashMap;

const FRONT_MATTER: &str =
    "---\ntitle: Post\nauthor: Writer\ndate: 2024-02-29\nurl: https://medium.com/@writer/post\n---\n";

fn options() -> ConversionOptions {
    ConversionOptions {
        url: "https://medium.com/@writer/post".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 2, 29),
        ..Default::default()
    }
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head>
<meta name="title" content="Post">
<meta name="author" content="Writer">
<meta property="og:url" content="https://medium.com/p/og">
</head><body>{}</body></html>"#,
        body
    )
}

fn assert_body(body_html: &str, expected_body: &str) {
    match convert_html(&page(body_html), &options(), &Offline) {
        Ok(doc) => assert_eq!(doc.post.contents, expected_body, "body html: {}", body_html),
        Err(e) => panic!("Conversion failed for HTML '{}': {:?}", body_html, e),
    }
}

/// Records requested URLs and serves canned bodies.
struct RecordingFetcher {
    images: HashMap<&'static str, &'static str>,
    requested: RefCell<Vec<String>>,
}

impl RecordingFetcher {
    fn new(images: &[(&'static str, &'static str)]) -> Self {
        Self {
            images: images.iter().copied().collect(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl Fetch for RecordingFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ConvertError> {
        self.requested.borrow_mut().push(url.to_string());
        self.images
            .get(url)
            .map(|body| body.as_bytes().to_vec())
            .ok_or_else(|| ConvertError::network(url, "Request failed with status: 404 Not Found"))
    }
}

#[rstest]
#[case("<h1>Title</h1>", "\n# Title\n")]
#[case("<h2>Section</h2>", "\n## Section\n")]
#[case("<h3>Too deep</h3><h4>Deeper</h4><h6>Deepest</h6>", "")]
#[case(r#"<p class="pw-post-body-paragraph">Hello</p>"#, "\nHello\n")]
#[case("<p>Member-only story</p>", "")]
#[case(r#"<p class="graf">Not a body paragraph</p>"#, "")]
#[case("<ul><li>a</li><li><b>b</b></li></ul>", "\n- a\n\n\n- **b** \n\n")]
#[case("<pre>fn main() {}</pre>", "```\nfn main() {}\n```\n")]
#[case("<pre><span>line 1</span><br><span>line 2</span></pre>", "```\nline 1\nline 2\n```\n")]
#[case(
    r#"<picture><source srcset="https://miro.medium.com/a.jpg 1x, https://miro.medium.com/b.webp 2x"></picture>"#,
    "![Medium-Image](https://miro.medium.com/b.webp)\n"
)]
#[case(r#"<picture><source srcset="a.jpg 1x, b.png 2x"></picture>"#, "")]
fn test_block_conversion(#[case] body_html: &str, #[case] expected: &str) {
    assert_body(body_html, expected);
}

#[test]
fn test_inline_order_and_spacing() {
    assert_body(
        r#"<p class="pw-post-body-paragraph"><strong>A</strong> and <em>B</em></p>"#,
        "\n**A**  and *B*\n",
    );
}

#[test]
fn test_inline_link_and_code() {
    assert_body(
        r#"<p class="pw-post-body-paragraph">Run <code>cargo test</code> or read <a href="https://doc.rust-lang.org">the docs</a>.</p>"#,
        "\nRun `cargo test`  or read [the docs](https://doc.rust-lang.org) .\n",
    );
}

#[test]
fn test_markdown_metacharacters_are_not_escaped_by_default() {
    assert_body(
        r#"<p class="pw-post-body-paragraph">2 * 3 = _six_</p>"#,
        "\n2 * 3 = _six_\n",
    );
}

#[test]
fn test_nested_wrappers_are_walked() {
    assert_body(
        r#"<article><div><section><div><div>
            <h1 class="pw-post-title">Deep Title</h1>
            <div role="button"><p>Listen</p></div>
            <p class="pw-post-body-paragraph">First<br>line</p>
        </div></div></section></div></article>"#,
        "\n# Deep Title\n\nFirst\nline\n",
    );
}

#[test]
fn test_no_content_yields_front_matter_only() {
    let doc = convert_html(&page("<div><span>nav</span><p>footer</p></div>"), &options(), &Offline)
        .unwrap();
    assert_eq!(doc.markdown, FRONT_MATTER);
}

#[test]
fn test_full_document() {
    let doc = convert_html(
        &page(r#"<h1>Post</h1><p class="pw-post-body-paragraph">Body</p>"#),
        &options(),
        &Offline,
    )
    .unwrap();
    assert_eq!(doc.markdown, format!("{}\n\n# Post\n\nBody\n", FRONT_MATTER));
    assert_eq!(doc.file_name(), "2024-02-29-Post.md");
    assert!(doc.warnings.is_empty());
}

#[test]
fn test_og_url_used_without_source_url() {
    let options = ConversionOptions {
        url: String::new(),
        ..options()
    };
    let doc = convert_html(&page(""), &options, &Offline).unwrap();
    assert_eq!(doc.post.url, "https://medium.com/p/og");
    assert!(doc.markdown.contains("\nurl: https://medium.com/p/og\n"));
}

#[test]
fn test_missing_metadata_is_not_fatal() {
    let doc = convert_html(
        r#"<html><body><h1>Only a heading</h1></body></html>"#,
        &ConversionOptions {
            date: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..Default::default()
        },
        &Offline,
    )
    .unwrap();
    assert_eq!(
        doc.markdown,
        "---\ntitle: \nauthor: \ndate: 2024-02-29\nurl: \n---\n\n\n# Only a heading\n"
    );
    assert_eq!(doc.file_stem, "2024-02-29-untitled");
    assert_eq!(doc.warnings.len(), 3);
}

#[test]
fn test_disabled_download_is_idempotent_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        output_dir: dir.path().to_path_buf(),
        ..options()
    };
    let fetcher = RecordingFetcher::new(&[]);
    let html = page(
        r#"<h1>Post</h1><picture><source srcset="https://m/1.webp 1x"></picture>
           <p class="pw-post-body-paragraph">text</p>"#,
    );

    let first = convert_html(&html, &options, &fetcher).unwrap();
    let second = convert_html(&html, &options, &fetcher).unwrap();

    assert_eq!(first.markdown, second.markdown);
    assert!(fetcher.requested.borrow().is_empty());
    assert!(first.images.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_downloaded_images_are_numbered_per_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let options = ConversionOptions {
        output_dir: dir.path().to_path_buf(),
        download_images: true,
        output_filename: Some("my-post.md".to_string()),
        ..options()
    };
    let fetcher = RecordingFetcher::new(&[
        ("https://m/1.webp", "one"),
        ("https://m/3.webp", "three"),
    ]);
    let html = page(
        r#"<figure><picture><source srcset="https://m/1.jpg 1x, https://m/1.webp 2x"></picture></figure>
           <figure><picture><source srcset="https://m/2.webp 1x"></picture></figure>
           <figure><picture><source srcset="https://m/3.webp 1x"></picture></figure>"#,
    );

    let doc = convert_html(&html, &options, &fetcher).unwrap();

    assert_eq!(
        doc.post.contents,
        "![Medium-Image](image/2024-02-29-my-post_0.png)\n![Medium-Image](image/2024-02-29-my-post_1.png)\n"
    );
    assert_eq!(
        *fetcher.requested.borrow(),
        vec!["https://m/1.webp", "https://m/2.webp", "https://m/3.webp"]
    );
    assert_eq!(
        doc.images,
        vec![
            dir.path().join("image").join("2024-02-29-my-post_0.png"),
            dir.path().join("image").join("2024-02-29-my-post_1.png"),
        ]
    );
    assert_eq!(std::fs::read(&doc.images[1]).unwrap(), b"three");
    assert!(matches!(doc.warnings.as_slice(), [ConvertError::Network { url, .. }] if url == "https://m/2.webp"));

    // A second conversion starts numbering from zero again.
    let again = convert_html(&html, &options, &fetcher).unwrap();
    assert_eq!(again.images, doc.images);
}
