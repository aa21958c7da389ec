use clap::Parser;
use medium_crawler::config::{Config, LogFormat};
use medium_crawler::crawler::{Crawler, OutputFormat, Source};
use medium_crawler::http_client::{ClientOptions, HttpClient, parse_header};
use medium_markdown::{ConversionOptions, DEFAULT_IMAGE_LINK_PATH, ImageExtension};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Fetch a Medium article, convert it to Markdown with a front-matter header
/// and save it as {output-dir}/{YYYY-MM-DD}-{name}.md.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct CliArgs {
    /// The article URL.
    #[clap(required_unless_present = "html_file")]
    url: Option<Url>,
    /// Convert a saved HTML file instead of fetching the URL.
    /// The URL, if also given, is only written to the front matter.
    #[clap(long, value_name = "PATH")]
    html_file: Option<PathBuf>,
    /// Output directory. Defaults to $MEDIUM_MD_OUTPUT_DIR or medium/origin_md.
    #[clap(short, long)]
    output_dir: Option<PathBuf>,
    /// File name to use instead of the sanitized title. The date prefix is kept.
    #[clap(short, long)]
    filename: Option<String>,
    /// Path prefix for downloaded image links.
    #[clap(long, default_value = DEFAULT_IMAGE_LINK_PATH)]
    link_image_path: String,
    /// Download images into {output-dir}/image and link to the local copies.
    #[clap(short, long)]
    download_images: bool,
    /// Keep the image URL's extension instead of always saving .png.
    #[clap(long)]
    keep_image_extension: bool,
    /// Backslash-escape Markdown metacharacters in text outside code blocks.
    #[clap(long)]
    escape_markdown: bool,
    /// Skip TLS certificate verification.
    #[clap(short = 'k', long)]
    insecure: bool,
    /// Extra request header, e.g. -H "Cookie: sid=...". May be repeated.
    #[clap(short = 'H', long = "header", value_name = "NAME: VALUE")]
    headers: Vec<String>,
    /// Request timeout in seconds. Defaults to $MEDIUM_MD_TIMEOUT_SECS or 30.
    #[clap(long)]
    timeout: Option<u64>,
    /// Output format.
    #[clap(short = 'F', long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
    /// Print the document to stdout instead of saving it.
    #[clap(long)]
    stdout: bool,
}

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(medium_crawler::config::DEFAULT_LOG_LEVEL));

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> miette::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    let args = CliArgs::parse();

    let mut headers = vec![("User-Agent".to_string(), config.user_agent.clone())];
    for header in &args.headers {
        headers.push(parse_header(header)?);
    }
    let http_client = HttpClient::new(&ClientOptions {
        verify_tls: !args.insecure,
        headers,
        timeout: Duration::from_secs(args.timeout.unwrap_or(config.timeout_secs)),
    })?;

    let options = ConversionOptions {
        url: args.url.as_ref().map(Url::to_string).unwrap_or_default(),
        output_dir: args.output_dir.unwrap_or(config.output_dir),
        output_filename: args.filename,
        link_image_path: args.link_image_path,
        download_images: args.download_images,
        image_extension: if args.keep_image_extension {
            ImageExtension::FromSource
        } else {
            ImageExtension::Png
        },
        escape_markdown: args.escape_markdown,
        ..Default::default()
    };

    let source = match (args.html_file, args.url) {
        (Some(path), _) => Source::HtmlFile(path),
        (None, Some(url)) => Source::Url(url),
        (None, None) => return Err(miette::miette!("Either a URL or --html-file is required")),
    };

    let crawler = Crawler::new(http_client, options, args.format, args.stdout);
    let outcome = crawler.run(&source)?;

    if args.stdout {
        print!("{}", outcome.rendered);
    }
    outcome.result.write_stats_to_stderr();

    Ok(())
}
