//! CLI binary for the NexTara site data: validate service content and emit JSON-LD.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nextara_core::cta::{micro_trust, resolve_ctas};
use nextara_core::{ServiceSlug, Site};
use nextara_schema::SchemaGraph;
use nextara_schema::ids;
use nextara_schema::pages;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nextara", about = "NexTara service content and structured data")]
struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Site origin, overriding nextara.toml and NEXTARA_ORIGIN
    #[arg(long, global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the service registry
    Validate,

    /// List services in hub order
    Services,

    /// Show one service with its resolved calls to action
    Show {
        /// Service slug (e.g. dcs-audits)
        slug: String,
    },

    /// Print the stable @id of every site-level entity
    Ids {
        /// Also print the WebPage @id for this path
        #[arg(long)]
        path: Option<String>,
    },

    /// Emit a JSON-LD document
    Schema {
        #[command(subcommand)]
        target: SchemaTarget,

        /// Wrap the document in a <script type="application/ld+json"> element
        #[arg(long, global = true)]
        script: bool,

        /// Single-line JSON instead of pretty-printed
        #[arg(long, global = true)]
        compact: bool,
    },
}

#[derive(Subcommand)]
enum SchemaTarget {
    /// Organization and WebSite nodes (home page)
    Site,
    /// Services hub: WebPage, breadcrumbs and the ItemList of services
    Hub,
    /// A service landing page
    Service {
        /// Service slug (e.g. dcs-audits)
        slug: String,
    },
    /// Any other content page
    Page {
        #[arg(long)]
        path: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

/// Load config and registry once; every command runs against the result.
fn init(project_root: &Path, origin: Option<&str>) -> Result<Site> {
    let mut site = Site::load(project_root)?;
    if let Some(origin) = origin {
        site.config.set_origin(origin)?;
    }
    Ok(site)
}

fn parse_slug(slug: &str) -> Result<ServiceSlug> {
    slug.parse::<ServiceSlug>().map_err(|e| {
        let known: Vec<&str> = ServiceSlug::ALL.iter().map(|s| s.as_str()).collect();
        anyhow::anyhow!("{}. Known slugs: {}", e, known.join(", "))
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let site = init(&project_root, cli.origin.as_deref())?;

    match cli.command {
        Commands::Validate => cmd_validate(&site),
        Commands::Services => cmd_services(&site),
        Commands::Show { slug } => cmd_show(&site, &slug),
        Commands::Ids { path } => cmd_ids(&site, path.as_deref()),
        Commands::Schema {
            target,
            script,
            compact,
        } => cmd_schema(&site, &target, script, compact),
    }
}

fn cmd_validate(site: &Site) -> Result<()> {
    println!("Service registry OK: {} services", site.registry.len());
    Ok(())
}

fn cmd_services(site: &Site) -> Result<()> {
    for page in site.registry.get_all_services() {
        println!(
            "{:>3}  {:<26} {:<28} {}",
            page.order,
            page.slug,
            page.name,
            ids::service_url(site.origin(), page.slug)
        );
    }
    Ok(())
}

fn cmd_show(site: &Site, slug: &str) -> Result<()> {
    let slug = parse_slug(slug)?;
    let page = site.registry.get_service(slug);
    let ctas = resolve_ctas(page);

    println!("{} ({})", page.name, page.slug);
    println!("  URL:        {}", ids::service_url(site.origin(), slug));
    println!("  Title:      {}", page.seo_title);
    println!("  Headline:   {}", page.outcome_headline);
    println!("  Order:      {}", page.order);
    println!("  Primary:    {} -> {}", ctas.primary.label, ctas.primary.href);
    println!(
        "  Secondary:  {} -> {}",
        ctas.secondary.label, ctas.secondary.href
    );
    println!("  {}", micro_trust());
    println!(
        "  Sections:   {} deliverables, {} steps, {} checks, {} FAQs",
        page.deliverables.len(),
        page.process_steps.len(),
        page.proof_checklist.len(),
        page.faq.len()
    );
    println!("  Related:");
    for related in site
        .registry
        .get_related_services_data(&page.related_services)
    {
        println!("    - {} ({})", related.name, related.slug);
    }
    Ok(())
}

fn cmd_ids(site: &Site, path: Option<&str>) -> Result<()> {
    let origin = site.origin();
    println!("Organization  {}", ids::organization_id(origin));
    println!("WebSite       {}", ids::web_site_id(origin));
    println!("ItemList      {}", ids::item_list_id(origin));
    for slug in site.registry.get_service_slugs() {
        println!("Service       {}", ids::service_id(origin, slug));
    }
    if let Some(path) = path {
        println!("WebPage       {}", ids::web_page_id(origin, path));
    }
    Ok(())
}

fn cmd_schema(site: &Site, target: &SchemaTarget, script: bool, compact: bool) -> Result<()> {
    let origin = site.origin();
    let graph: SchemaGraph = match target {
        SchemaTarget::Site => pages::site_graph(origin),
        SchemaTarget::Hub => pages::services_hub_graph(origin, &site.registry),
        SchemaTarget::Service { slug } => {
            let slug = parse_slug(slug)?;
            pages::service_page_graph(origin, site.registry.get_service(slug))
        }
        SchemaTarget::Page {
            path,
            title,
            description,
        } => pages::content_page_graph(origin, path, title, description),
    };

    let output = if script {
        graph.to_script_tag()?
    } else if compact {
        graph.to_json_compact()?
    } else {
        graph.to_json()?
    };
    println!("{}", output);
    Ok(())
}
