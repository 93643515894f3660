//! inkdown CLI - Render article Markdown to HTML
//!
//! Usage:
//!   inkdown [OPTIONS] <FILE>
//!
//! Commands:
//!   render    Convert the file to HTML (default)
//!   tree      Display the parsed block structure
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use inkdown_core::{parse, Block, Document, Inline, ListKind, Renderer};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Render => cmd_render(&input, &config),
        Command::Tree => cmd_tree(&input, &config),
        Command::Stats => cmd_stats(&input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    raw_html: bool,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Tree,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut raw_html = false;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("inkdown {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-r" | "--raw-html" => raw_html = true,
            "render" => command = Command::Render,
            "tree" => command = Command::Tree,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        raw_html,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"inkdown - article Markdown renderer

USAGE:
    inkdown [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Convert the file to HTML (default)
    tree        Display the parsed block structure
    stats       Show document statistics

OPTIONS:
    -r, --raw-html   Pass source HTML through unescaped (trusted input only)
    -v, --verbose    Show detailed tree structure
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    inkdown article.md            Render a Markdown file to HTML
    inkdown -r article.md         Render without HTML escaping
    inkdown tree article.md       Show the block structure
    inkdown -j tree article.md    Output the tree as JSON
    inkdown stats article.md      Show document statistics
"#
    );
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, config: &Config) -> Result<(), String> {
    let renderer = if config.raw_html {
        Renderer::new().with_raw_html()
    } else {
        Renderer::new()
    };

    let html = renderer.render(input);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "html": html })),
        OutputFormat::Text => println!("{}", html),
    }

    Ok(())
}

// =============================================================================
// Tree Command
// =============================================================================

fn cmd_tree(input: &str, config: &Config) -> Result<(), String> {
    let doc = parse(input);

    match config.format {
        OutputFormat::Json => print_json(&doc),
        OutputFormat::Text => {
            if config.verbose {
                print_document_verbose(&doc);
            } else {
                print_document_summary(&doc);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) -> Result<(), String> {
    let doc = parse(input);
    let stats = DocumentStats::from_document(&doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Blockquotes:    {}", stats.quotes);
    println!("  Rules:          {}", stats.rules);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}

struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    lists: usize,
    list_items: usize,
    code_blocks: usize,
    quotes: usize,
    rules: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: 0,
            headings: 0,
            paragraphs: 0,
            lists: 0,
            list_items: 0,
            code_blocks: 0,
            quotes: 0,
            rules: 0,
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for block in &doc.blocks {
            stats.total_blocks += 1;
            match block {
                Block::Heading { .. } => stats.headings += 1,
                Block::Paragraph { .. } => stats.paragraphs += 1,
                Block::List { items, .. } => {
                    stats.lists += 1;
                    stats.list_items += items.len();
                }
                Block::CodeBlock { .. } => stats.code_blocks += 1,
                Block::Quote { .. } => stats.quotes += 1,
                Block::Rule => stats.rules += 1,
            }
        }

        stats
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
    List {
        kind: &'a str,
        items: Vec<Vec<JsonInline<'a>>>,
    },
    CodeBlock {
        lang: &'a str,
        content: &'a str,
    },
    Quote {
        content: Vec<JsonInline<'a>>,
    },
    Rule,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text {
        content: &'a str,
    },
    Strong {
        content: Vec<JsonInline<'a>>,
    },
    Emphasis {
        content: Vec<JsonInline<'a>>,
    },
    Code {
        content: &'a str,
    },
    Link {
        label: Vec<JsonInline<'a>>,
        url: &'a str,
    },
    Image {
        alt: &'a str,
        url: &'a str,
    },
    LineBreak,
}

fn print_json(doc: &Document) {
    let json_doc = JsonDocument {
        blocks: doc.blocks.iter().map(convert_block).collect(),
    };
    match serde_json::to_string_pretty(&json_doc) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("error: failed to serialize tree: {}", e),
    }
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading { level, content } => JsonBlock::Heading {
            level: *level,
            content: content.iter().map(convert_inline).collect(),
        },
        Block::Paragraph { content } => JsonBlock::Paragraph {
            content: content.iter().map(convert_inline).collect(),
        },
        Block::List { kind, items } => JsonBlock::List {
            kind: match kind {
                ListKind::Ordered => "ordered",
                ListKind::Unordered => "unordered",
            },
            items: items
                .iter()
                .map(|item| item.iter().map(convert_inline).collect())
                .collect(),
        },
        Block::CodeBlock { lang, content } => JsonBlock::CodeBlock {
            lang,
            content,
        },
        Block::Quote { content } => JsonBlock::Quote {
            content: content.iter().map(convert_inline).collect(),
        },
        Block::Rule => JsonBlock::Rule,
    }
}

fn convert_inline<'a>(inline: &'a Inline) -> JsonInline<'a> {
    match inline {
        Inline::Text(content) => JsonInline::Text { content },
        Inline::Strong(content) => JsonInline::Strong {
            content: content.iter().map(convert_inline).collect(),
        },
        Inline::Emphasis(content) => JsonInline::Emphasis {
            content: content.iter().map(convert_inline).collect(),
        },
        Inline::Code(content) => JsonInline::Code { content },
        Inline::Link { label, url } => JsonInline::Link {
            label: label.iter().map(convert_inline).collect(),
            url,
        },
        Inline::Image { alt, url } => JsonInline::Image { alt, url },
        Inline::LineBreak => JsonInline::LineBreak,
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_document_summary(doc: &Document) {
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== inkdown tree ===");
    println!();
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!();
        println!("[{}] {}", i + 1, describe_block(block));
        print_block_verbose(block, 1);
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading { level, .. } => format!("Heading (level {})", level),
        Block::Paragraph { .. } => "Paragraph".to_string(),
        Block::List { kind, items } => format!("List ({:?}, {} items)", kind, items.len()),
        Block::CodeBlock { lang, .. } => format!("CodeBlock (lang: {})", lang),
        Block::Quote { .. } => "Blockquote".to_string(),
        Block::Rule => "Rule".to_string(),
    }
}

fn print_block_verbose(block: &Block, indent: usize) {
    let prefix = "  ".repeat(indent);

    match block {
        Block::Heading { content, .. } | Block::Paragraph { content } | Block::Quote { content } => {
            println!("{}Content: {}", prefix, format_inlines(content));
        }
        Block::List { items, .. } => {
            for (i, item) in items.iter().enumerate() {
                println!("{}Item {}: {}", prefix, i + 1, format_inlines(item));
            }
        }
        Block::CodeBlock { content, .. } => {
            let preview: String = content.chars().take(60).collect();
            let ellipsis = if content.len() > 60 { "..." } else { "" };
            println!(
                "{}Content: {}{}",
                prefix,
                preview.replace('\n', "\\n"),
                ellipsis
            );
        }
        Block::Rule => {}
    }
}

/// Reconstruct a source-like rendition of inline content for display.
fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(content) => result.push_str(content),
            Inline::Strong(content) => {
                result.push_str("**");
                result.push_str(&format_inlines(content));
                result.push_str("**");
            }
            Inline::Emphasis(content) => {
                result.push('*');
                result.push_str(&format_inlines(content));
                result.push('*');
            }
            Inline::Code(content) => {
                result.push('`');
                result.push_str(content);
                result.push('`');
            }
            Inline::Link { label, url } => {
                result.push('[');
                result.push_str(&format_inlines(label));
                result.push_str("](");
                result.push_str(url);
                result.push(')');
            }
            Inline::Image { alt, url } => {
                result.push_str("![");
                result.push_str(alt);
                result.push_str("](");
                result.push_str(url);
                result.push(')');
            }
            Inline::LineBreak => result.push_str("\\n"),
        }
    }
    result
}
