// site-match - sorts site emails, chats, and tasks into their projects
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// Everything works over JSON snapshots: a project catalog, a record batch,
// and optionally an alias table or group rules.

use site_match_lib::{
    catalog::{load_records, Catalog},
    classify::{GroupClassifier, ProjectSearcher, RecordClassifier},
    core::{
        match_field, project_feed, project_feed_of_kind, AliasTable, MatchStrategy, MatcherConfig,
        Resolver, DEFAULT_FEED_LIMIT,
    },
    MatchError, RecordKind, Result,
};
use std::env;

fn main() {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "resolve" => handle_resolve(&args[2..]),
        "classify" => handle_classify(&args[2..]),
        "check" => handle_check(&args[2..]),
        "feed" => handle_feed(&args[2..]),
        "groups" => handle_groups(&args[2..]),
        "suggest" => handle_suggest(&args[2..]),
        "version" | "-v" | "--version" => {
            println!("site-match v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e.user_message());
        std::process::exit(1);
    }
}

fn handle_resolve(args: &[String]) -> Result<()> {
    let mut positional: Vec<String> = Vec::new();
    let mut strategy = MatchStrategy::First;
    let mut aliases_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                i += 1;
                if i < args.len() {
                    strategy = args[i].parse()?;
                }
            }
            "--aliases" => {
                i += 1;
                if i < args.len() {
                    aliases_path = Some(args[i].clone());
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() < 2 {
        eprintln!("Usage: site-match resolve <projects.json> <records.json> [--strategy first|all|specific] [--aliases <file>]");
        return Ok(());
    }

    let catalog = Catalog::from_path(&positional[0])?;
    let records = load_records(&positional[1])?;
    let resolver = Resolver::new(load_matcher_config(aliases_path.as_deref())?);

    println!(
        "\nResolving {} record(s) against {} project(s)",
        records.len(),
        catalog.len()
    );
    println!("Body scan: first {} chars", resolver.config().body_scan_chars);
    println!("{}", "=".repeat(60));

    for (i, record) in records.iter().enumerate() {
        let headline = record.headline().unwrap_or("(no headline)");
        let hits = resolver.resolve(record, catalog.projects(), strategy);

        if hits.is_empty() {
            println!("{:3}. [{}] {} -> (none)", i + 1, record.kind, headline);
        } else {
            let summary: Vec<String> = hits
                .iter()
                .map(|hit| format!("{} via {}", hit.project.name, hit.field))
                .collect();
            println!(
                "{:3}. [{}] {} -> {}",
                i + 1,
                record.kind,
                headline,
                summary.join(", ")
            );
        }
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_classify(args: &[String]) -> Result<()> {
    let mut positional: Vec<String> = Vec::new();
    let mut aliases_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--aliases" => {
                i += 1;
                if i < args.len() {
                    aliases_path = Some(args[i].clone());
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() < 2 {
        eprintln!("Usage: site-match classify <projects.json> <records.json> [--aliases <file>]");
        return Ok(());
    }

    let catalog = Catalog::from_path(&positional[0])?;
    let records = load_records(&positional[1])?;
    let aliases = match aliases_path.as_deref() {
        Some(path) => AliasTable::from_path(path)?,
        None => AliasTable::builtin(),
    };

    let classifier = RecordClassifier::new(aliases);
    let results = classifier.classify_batch(&records, catalog.projects());

    println!("\nClassified {} record(s)", records.len());
    println!("{}", "=".repeat(60));

    for (i, (record, result)) in records.iter().zip(results.iter()).enumerate() {
        let headline = record.headline().unwrap_or("(no headline)");
        match result.project {
            Some(project) => println!(
                "{:3}. [{}] {} -> {} ({}, {:.0}%)",
                i + 1,
                record.kind,
                headline,
                project.name,
                result.method,
                result.confidence * 100.0
            ),
            None => println!("{:3}. [{}] {} -> (unmatched)", i + 1, record.kind, headline),
        }
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_check(args: &[String]) -> Result<()> {
    let mut positional: Vec<String> = Vec::new();
    let mut aliases_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--aliases" => {
                i += 1;
                if i < args.len() {
                    aliases_path = Some(args[i].clone());
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() < 2 {
        eprintln!("Usage: site-match check <projects.json> <text> [--aliases <file>]");
        return Ok(());
    }

    let catalog = Catalog::from_path(&positional[0])?;
    let text = positional[1..].join(" ");
    let resolver = Resolver::new(load_matcher_config(aliases_path.as_deref())?);

    let stats = catalog.stats();
    println!(
        "\nCatalog: {} project(s), {} with code, {} with venue",
        stats.total_projects, stats.with_code, stats.with_venue
    );
    println!("Aliases: {} key(s)", resolver.config().aliases.len());
    println!("Text: \"{}\"", text);
    println!("{}", "=".repeat(60));

    for project in catalog.projects() {
        let direct = match match_field(&text, project) {
            Some(field) => format!("✓ {}", field),
            None => "✗".to_string(),
        };
        let fuzzy = if resolver.fuzzy_matches(&text, project) {
            "✓"
        } else {
            "✗"
        };
        println!("  {:<24} direct: {:<8} fuzzy: {}", project.name, direct, fuzzy);
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_feed(args: &[String]) -> Result<()> {
    let mut positional: Vec<String> = Vec::new();
    let mut limit = DEFAULT_FEED_LIMIT;
    let mut kind: Option<RecordKind> = None;
    let mut aliases_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                i += 1;
                if i < args.len() {
                    limit = args[i].parse().unwrap_or(DEFAULT_FEED_LIMIT);
                }
            }
            "--kind" => {
                i += 1;
                if i < args.len() {
                    kind = parse_kind(&args[i]);
                    if kind.is_none() {
                        eprintln!("Unknown kind '{}'. Use email, message, or task", args[i]);
                        return Ok(());
                    }
                }
            }
            "--aliases" => {
                i += 1;
                if i < args.len() {
                    aliases_path = Some(args[i].clone());
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() < 3 {
        eprintln!("Usage: site-match feed <projects.json> <records.json> <project> [--limit <n>] [--kind email|message|task]");
        return Ok(());
    }

    let catalog = Catalog::from_path(&positional[0])?;
    let records = load_records(&positional[1])?;
    let name = positional[2..].join(" ");
    let resolver = Resolver::new(load_matcher_config(aliases_path.as_deref())?);

    let project = catalog
        .find_by_name(&name)
        .ok_or_else(|| MatchError::ProjectNotFound(name.clone()))?;

    let feed = match &kind {
        Some(kind) => project_feed_of_kind(&records, kind, project, &resolver, limit),
        None => project_feed(&records, project, &resolver, limit),
    };

    println!(
        "\nFeed for {} ({} of {} record(s))",
        project.name,
        feed.len(),
        records.len()
    );
    println!("{}", "=".repeat(60));

    if feed.is_empty() {
        println!("Nothing here yet.");
    } else {
        for (i, record) in feed.iter().enumerate() {
            println!(
                "{:3}. [{:<7}] {:<25} {}",
                i + 1,
                record.kind.to_string(),
                record.created_at.as_deref().unwrap_or("undated"),
                record.headline().unwrap_or("(no headline)")
            );
        }
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_groups(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: site-match groups <rules.json> <group name>");
        return Ok(());
    }

    let classifier = GroupClassifier::from_path(&args[0])?;
    let name = args[1..].join(" ");

    let result = classifier.classify(&name);

    println!("\nGroup: {}", name);
    println!("{}", "=".repeat(60));
    match &result.project {
        Some(project) => println!(
            "Project: {} (confidence {:.0}%)",
            project,
            result.confidence * 100.0
        ),
        None => println!("Project: (none)"),
    }
    println!("Kind:    {}", result.kind);
    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_suggest(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: site-match suggest <projects.json> <hint>");
        return Ok(());
    }

    let catalog = Catalog::from_path(&args[0])?;
    let hint = args[1..].join(" ");
    let searcher = ProjectSearcher::new();

    match searcher.find_by_hint(&hint, catalog.projects()) {
        Some(project) => println!("\nBest match: {}", project.name),
        None => println!("\nNo direct match for '{}'", hint),
    }

    let suggestions = searcher.suggest(&hint, catalog.projects(), 5);
    if !suggestions.is_empty() {
        println!("\nClose names:");
        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("{:3}. {} (score {})", i + 1, suggestion.project.name, suggestion.score);
        }
    }

    Ok(())
}

fn load_matcher_config(aliases_path: Option<&str>) -> Result<MatcherConfig> {
    let mut config = MatcherConfig::default();
    if let Some(path) = aliases_path {
        config.aliases = AliasTable::from_path(path)?;
    }
    Ok(config)
}

fn parse_kind(s: &str) -> Option<RecordKind> {
    match s {
        "email" => Some(RecordKind::Email),
        "message" => Some(RecordKind::Message),
        "task" => Some(RecordKind::Task),
        _ => None,
    }
}

fn print_usage() {
    println!(
        r#"site-match v{} - Which project does that email belong to?

USAGE:
    site-match <COMMAND> [OPTIONS]

COMMANDS:
    resolve <projects> <records>           Match records to projects
    classify <projects> <records>          Score matches with confidence
    check <projects> <text>                Probe which projects some text hits
    feed <projects> <records> <project>    Newest records for one project
    groups <rules> <name>                  Classify a chat group name
    suggest <projects> <hint>              Look up a project from a hint
    version                                Show version
    help                                   Show this help

OPTIONS:
    --aliases <file>    Alias table JSON (resolve, classify, check, feed)
    --strategy <s>      first | all | specific (resolve)
    --limit <n>         Feed size (feed, default {})
    --kind <k>          email | message | task (feed)

EXAMPLES:
    site-match resolve projects.json inbox.json
    site-match resolve projects.json inbox.json --strategy specific
    site-match check projects.json "AGR-GEM Invoice #4"
    site-match feed projects.json inbox.json Agora --limit 10
    site-match groups rules.json Agora GEM Site Team

SNAPSHOTS:
    projects.json  [{{"name": "Agora", "code": "AGR-GEM", "venue": "Grand Egyptian Museum"}}]
    inbox.json     [{{"type": "email", "subject": "AGR-GEM Invoice #4", "body": "..."}}]
    aliases.json   {{"agora": ["agora gem", "agura gem", "gem"]}}
"#,
        env!("CARGO_PKG_VERSION"),
        DEFAULT_FEED_LIMIT
    );
}
