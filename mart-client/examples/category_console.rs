// mart-client/examples/category_console.rs
// 分类树控制台 - prints the category table as the admin panel renders it
//
// Usage: category_console [--search TERM] [--expand ID]... [--expand-all]

use anyhow::{Context, bail};
use category_tree::CategoryTreeViewModel;
use mart_client::{CategoryApi, ClientConfig, logger};

const USAGE: &str = "Usage: category_console [--search TERM] [--expand ID]... [--expand-all]";

struct Args {
    search: Option<String>,
    expand: Vec<i64>,
    expand_all: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        search: None,
        expand: Vec::new(),
        expand_all: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--search" => args.search = Some(iter.next().context("--search needs a value")?),
            "--expand" => {
                let id = iter.next().context("--expand needs an id")?;
                args.expand.push(id.parse().with_context(|| format!("invalid id: {}", id))?);
            }
            "--expand-all" => args.expand_all = true,
            other => bail!("unknown argument: {}\n{}", other, USAGE),
        }
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();
    let args = parse_args()?;

    let config = ClientConfig::from_env();
    tracing::info!("Connecting to {}", config.base_url);

    let api = CategoryApi::from_config(&config)?;
    let mut vm = CategoryTreeViewModel::new(api);
    vm.refresh().await.context("failed to load category tree")?;

    if args.expand_all {
        let ids: Vec<i64> = vm.arena().preorder().map(|(_, c)| c.id).collect();
        for id in ids {
            vm.expand(id);
        }
    }
    for id in args.expand {
        vm.expand(id);
    }
    if let Some(term) = args.search {
        vm.set_search_term(term);
    }

    let rows = vm.rows();
    for row in &rows {
        let marker = match (row.has_children(), row.is_expanded) {
            (false, _) => ' ',
            (true, true) => '-',
            (true, false) => '+',
        };
        println!(
            "{}{} [{}] {}  {}",
            "  ".repeat(row.level),
            marker,
            row.id,
            row.name,
            row.description
        );
    }
    println!("{} of {} categories shown", rows.len(), vm.arena().len());

    Ok(())
}
