//! Text rendering and command dispatch for the `storyline` binary.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use storyline_blocks::{ArticlesBlock, BigTextBlock, Block, BlockRegistry, HeroBlock, SectionBlock};
use storyline_model::{ArticleBlock, ArticleCard, LinksResponse};
use storyline_pipeline::{
    ContentSource, Page, PipelineConfig, load_article, load_article_cards, load_links, load_page,
};
use storyline_richtext::to_plain_text;
use tracing::debug;

/// The rendered form of one block: plain text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextView {
    pub lines: Vec<String>,
}

impl TextView {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render a page by path
    Page {
        #[arg(default_value = "home")]
        slug: String,
    },
    /// Render one article (the article folder prefix is added if missing)
    Article { slug: String },
    /// List article cards
    Articles {
        /// Only stories under this path (defaults to the article folder)
        #[arg(long)]
        starts_with: Option<String>,
    },
    /// List the site tree
    Links,
}

/// The block renderers the CLI knows about.
pub fn build_registry() -> BlockRegistry<TextView> {
    let mut registry = BlockRegistry::new();
    registry.register::<HeroBlock, _>("hero", hero_view);
    registry.register::<ArticlesBlock, _>("popular-articles", articles_view);
    registry.register::<ArticlesBlock, _>("all-articles", articles_view);
    registry.register::<BigTextBlock, _>("big_text", big_text_view);
    registry.register_fn("section", |block: &Block| match block {
        Block::Section(_) => Some(text_view(block)),
        _ => None,
    });
    registry
}

/// Renders any block, whatever its component.
pub fn text_view(block: &Block) -> TextView {
    match block {
        Block::Hero(b) => hero_view(b),
        Block::Articles(b) => articles_view(b),
        Block::BigText(b) => big_text_view(b),
        Block::Section(b) => section_view(b),
    }
}

fn hero_view(hero: &HeroBlock) -> TextView {
    let mut view = TextView::default();
    view.push(format!("# {}", hero.headline));
    if let Some(sub) = &hero.subheadline {
        view.push(sub.clone());
    }
    if let Some(image) = &hero.background_image {
        view.push(format!("[image: {}]", image.filename));
    }
    view
}

fn articles_view(block: &ArticlesBlock) -> TextView {
    let mut view = TextView::default();
    view.push(format!("## {}", block.headline));
    match &block.resolved_articles {
        Some(cards) => {
            for card in cards {
                view.push(card_line(card));
            }
        }
        None => {
            for id in &block.articles {
                view.push(format!("- {id}"));
            }
        }
    }
    view
}

fn big_text_view(block: &BigTextBlock) -> TextView {
    let text = block.text.as_deref().map(to_plain_text).unwrap_or_default();
    TextView {
        lines: text.lines().map(str::to_owned).collect(),
    }
}

fn section_view(section: &SectionBlock) -> TextView {
    let mut view = TextView::default();
    if let Some(headline) = &section.headline {
        view.push(format!("## {headline}"));
    }
    for child in &section.body {
        for line in text_view(child).lines {
            view.push(format!("  {line}"));
        }
    }
    view
}

fn card_line(card: &ArticleCard) -> String {
    if card.teaser.is_empty() {
        format!("- {} ({})", card.title, card.full_slug)
    } else {
        format!("- {} ({}): {}", card.title, card.full_slug, card.teaser)
    }
}

pub fn render_page(page: &Page<TextView>) -> String {
    let mut out = format!("{}\n{}\n", page.name, "=".repeat(page.name.chars().count()));
    for block in &page.blocks {
        out.push('\n');
        for line in &block.view.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    if let Some(article) = &page.article {
        out.push('\n');
        out.push_str(&render_article(article));
    }
    out
}

pub fn render_article(article: &ArticleBlock) -> String {
    let mut out = format!("# {}\n", article.title);
    if !article.teaser.is_empty() {
        out.push_str(&article.teaser);
        out.push('\n');
    }
    if let Some(image) = &article.image {
        out.push_str(&format!("[image: {}]\n", image.filename));
    }
    if let Some(content) = &article.content {
        out.push('\n');
        out.push_str(&to_plain_text(content));
    }
    out
}

pub fn render_cards(cards: &[ArticleCard]) -> String {
    cards.iter().map(|card| card_line(card) + "\n").collect()
}

pub fn render_links(links: &LinksResponse) -> String {
    links
        .ordered()
        .into_iter()
        .map(|link| {
            let marker = if link.is_folder { "/" } else { "" };
            let path = link.real_path.as_deref().unwrap_or(link.slug.as_str());
            format!("{}{} -> {}\n", link.name, marker, path)
        })
        .collect()
}

/// Runs one command against `source` and returns what to print.
pub fn execute<S>(
    command: &Command,
    source: &S,
    config: &PipelineConfig,
    json: bool,
) -> Result<String>
where
    S: ContentSource + ?Sized,
{
    debug!(?command, json, "Executing command");
    match command {
        Command::Page { slug } => {
            let registry = build_registry();
            let page = load_page(source, slug, &registry, config)
                .with_context(|| format!("Failed to load page {slug:?}"))?;
            output(&page, json, render_page)
        }
        Command::Article { slug } => {
            let article = load_article(source, slug, config)
                .with_context(|| format!("Failed to load article {slug:?}"))?;
            output(&article, json, render_article)
        }
        Command::Articles { starts_with } => {
            let cards = load_article_cards(source, starts_with.as_deref(), config)
                .context("Failed to load article list")?;
            output(&cards, json, |c: &Vec<ArticleCard>| render_cards(c))
        }
        Command::Links => {
            let links = load_links(source).context("Failed to load links")?;
            output(&links, json, render_links)
        }
    }
}

fn output<T: Serialize>(value: &T, json: bool, render: impl Fn(&T) -> String) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).context("Failed to serialize output")
    } else {
        Ok(render(value))
    }
}
