use clap::Parser;
use tagpages::application::{
    init, BuildOptions, BuildPagesService, CheckRegistryService, ConfigService, ListItemsService,
    ListOptions, ListTagsService,
};
use tagpages::cli::{
    format_check_report, format_item_list, format_tag_list, parse_date_arg, Cli, Commands,
};
use tagpages::error::TagPagesError;
use tagpages::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagPagesError> {
    match cli.command {
        Commands::Init { path, locale } => init::init(&path, &locale),
        Commands::Build { output } => {
            let repo = FileSystemRepository::discover()?;
            let service = BuildPagesService::new(repo);
            let outcome = service.execute(BuildOptions { output })?;
            println!(
                "Wrote {} tag page(s) to {}",
                outcome.pages,
                outcome.output_path.display()
            );
            Ok(())
        }
        Commands::List { drafts, from, to } => {
            let repo = FileSystemRepository::discover()?;
            let from = from.as_deref().map(parse_date_arg).transpose()?;
            let to = to.as_deref().map(parse_date_arg).transpose()?;

            let service = ListItemsService::new(repo);
            let items = service.execute(&ListOptions { drafts, from, to })?;
            println!("{}", format_item_list(&items).trim_end_matches('\n'));
            Ok(())
        }
        Commands::Tags { drafts } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListTagsService::new(repo);
            let tags = service.execute(drafts)?;
            println!("{}", format_tag_list(&tags).trim_end_matches('\n'));
            Ok(())
        }
        Commands::Check => {
            let repo = FileSystemRepository::discover()?;
            let service = CheckRegistryService::new(repo);
            let report = service.execute()?;
            println!("{}", format_check_report(&report).trim_end_matches('\n'));

            if report.unregistered.is_empty() {
                Ok(())
            } else {
                Err(TagPagesError::UnregisteredTags(report.unregistered.len()))
            }
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("locale = {}", config.locale);
                println!("content_dir = {}", config.content_dir);
                println!("registry = {}", config.registry);
                println!("output = {}", config.output);
                println!("tags_href = {}", config.tags_href);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagpages config [--list | <key> [<value>]]");
                println!("Valid keys: locale, content_dir, registry, output, tags_href, created");
                Ok(())
            }
        }
    }
}
