// Command-line front-end for the inventory admin client
//
// Runs the same controller as the browser page against the backend named
// by INVENTORY_API_URL (or --api-url), one sub-command per action:
// - list      Show one page of products, optionally filtered
// - add       Create a product
// - edit      Change a product
// - delete    Remove a product (asks first unless --yes)
// - upload    Import a CSV file
// - lookup    Show where a SKU is stored

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inventory_admin::config::AdminConfig;
use inventory_admin::web_app::admin::{
    AdminState, DeleteTarget, EditForm, Modal, ProductAdmin, ProductForm,
};
use inventory_admin::web_app::api::{HttpProductApi, ProductApi};
use inventory_admin::web_app::model::{normalize_sku, CsvUpload, ProductId};
use inventory_admin::web_app::view::ListView;

#[derive(Parser, Debug)]
#[command(name = "inventory_admin", version, about = "Manage the product inventory")]
struct Cli {
    /// Backend base URL, overrides INVENTORY_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of products
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Filter by SKU or name
        #[arg(long)]
        search: Option<String>,
        /// Overrides INVENTORY_PER_PAGE
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Create a product
    Add(ProductArgs),
    /// Change an existing product
    Edit {
        id: ProductId,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Remove a product
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Import products from a CSV file
    Upload { path: PathBuf },
    /// Show where a SKU is stored
    Lookup { sku: String },
}

#[derive(Args, Debug)]
struct ProductArgs {
    #[arg(long)]
    sku: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    display_case: String,
    #[arg(long)]
    column: String,
    #[arg(long)]
    row: String,
}

impl From<ProductArgs> for ProductForm {
    fn from(args: ProductArgs) -> Self {
        ProductForm {
            sku: args.sku,
            name: args.name,
            display_case: args.display_case,
            column: args.column,
            row: args.row,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AdminConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }

    let api = HttpProductApi::from_config(&config).context("Could not build the HTTP client")?;
    tracing::info!("Using backend at {}", api.base_url());
    let admin = ProductAdmin::new(api);
    let mut state = AdminState::new(config.items_per_page);

    match cli.command {
        Command::List {
            page,
            search,
            per_page,
        } => {
            if let Some(per_page) = per_page {
                state = AdminState::new(per_page);
            }
            state.page.current_page = page.max(1);
            state.page.current_search = search.unwrap_or_default().trim().to_string();
            admin.load_products(&mut state).await?;
        }
        Command::Add(product) => {
            admin.create_product(&mut state, &product.into()).await?;
            println!("Product added.");
        }
        Command::Edit { id, product } => {
            let original_sku = find_sku(&admin, id).await?;
            let edit = EditForm {
                id,
                original_sku,
                form: product.into(),
            };
            admin.update_product(&mut state, &edit).await?;
            println!("Product {} updated.", id);
        }
        Command::Delete { id, yes } => {
            let sku = find_sku(&admin, id).await?;
            if !yes && !confirm(&format!("Delete product {} ({})?", id, sku))? {
                println!("Cancelled.");
                return Ok(());
            }
            state.modal = Some(Modal::ConfirmDelete(DeleteTarget { id, sku }));
            admin.confirm_delete(&mut state).await?;
            println!("Product {} deleted.", id);
        }
        Command::Upload { path } => {
            let contents = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Could not read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            admin
                .upload_csv(&mut state, Some(CsvUpload { file_name, contents }))
                .await?;

            if let Some(result) = &state.csv_result {
                println!("{}", result.message);
                if result.show_errors() {
                    println!("Errors:");
                    for error in &result.errors {
                        println!("  - {}", error);
                    }
                }
            }
        }
        Command::Lookup { sku } => {
            match admin.lookup_sku(&sku).await? {
                Some(row) => println!("{}: {}", row.sku, row.location()),
                None => println!("No product with SKU {} was found.", normalize_sku(&sku)),
            }
            return Ok(());
        }
    }

    if let Some(listing) = &state.listing {
        print!("{}", render_table(listing));
    }

    Ok(())
}

/// Current SKU of a product; the backend has no single-product endpoint
async fn find_sku(admin: &ProductAdmin<HttpProductApi>, id: ProductId) -> Result<String> {
    let products = admin
        .api()
        .list_all_products()
        .await
        .context("Could not load products")?;

    match products.into_iter().find(|product| product.id == id) {
        Some(product) => Ok(product.sku),
        None => bail!("No product with id {}", id),
    }
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn render_table(listing: &ListView) -> String {
    if let Some(empty) = listing.empty {
        return format!("{}\n", empty);
    }

    let headers = ["ID", "SKU", "Name", "Case", "Column", "Row"];
    let cells: Vec<[String; 6]> = listing
        .rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.sku.clone(),
                row.name.clone(),
                row.display_case.clone(),
                row.column.to_string(),
                row.row.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: &[&str]| {
        values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{:<width$}", value, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(&headers));
    out.push('\n');
    for line in &cells {
        let values: Vec<&str> = line.iter().map(String::as_str).collect();
        out.push_str(&format_line(&values));
        out.push('\n');
    }

    if let Some(summary) = listing.summary {
        out.push_str(&format!("\n{}", summary));
        if listing.total_pages > 1 {
            out.push_str(&format!(" (page {} of {})", listing.page, listing.total_pages));
        }
        out.push('\n');
    }
    out
}
