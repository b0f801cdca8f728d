use clap::{Parser, Subcommand};
use diamond_store::{
    api::{HttpStoreApi, StoreApi},
    config,
    core::{category, checkout::clamp_quantity, format, transaction::Receipt},
    entities::Product,
    errors::{Error, Result},
    state::{ProductsState, TransactionsState},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Browse the diamond catalog and place top-up orders
#[derive(Debug, Parser)]
#[command(name = "diamond-store", version, about)]
struct Cli {
    /// Overrides the backend base URL
    #[arg(long, env = "DIAMOND_STORE_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List products, optionally filtered
    Products {
        /// Case-insensitive text search over name and description
        #[arg(long)]
        search: Option<String>,
        /// Category id (0 = all, 1-9 = games)
        #[arg(long, default_value_t = 0)]
        category: i64,
    },
    /// Show purchase history, most recent first
    History,
    /// Buy a product
    Buy {
        /// Product id
        product_id: i64,
        /// Quantity; clamped to between 1 and the product's stock
        quantity: i64,
    },
    /// Edit an existing transaction
    Update {
        /// Transaction id
        id: i64,
        /// Product id
        product_id: i64,
        /// New quantity
        quantity: i64,
        /// New total in whole Rupiah
        total_price: i64,
    },
    /// Delete a transaction
    Delete {
        /// Transaction id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file before clap reads env-backed arguments
    dotenv().ok();
    let cli = Cli::parse();

    // 3. Load the backend configuration
    let mut api_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    if let Some(base_url) = cli.base_url {
        api_config.base_url = config::api::normalize_base_url(&base_url);
    }

    // 4. Build the shared client and the state holders
    let api = Arc::new(HttpStoreApi::new(&api_config)?);
    let base_url = api.base_url().to_string();
    let products = ProductsState::new(Arc::clone(&api) as Arc<dyn StoreApi>, base_url);
    let transactions = TransactionsState::new(api);

    // 5. Run the requested action
    match cli.command {
        Command::Products {
            search,
            category: category_id,
        } => {
            let category = category::filter(category_id)?;
            load(&products).await?;
            let mut listed = products.in_category(category).await;
            if let Some(query) = search {
                let matches = products.search(&query).await;
                listed.retain(|p| matches.contains(p));
            }
            for product in &listed {
                print_product(product);
            }
            info!("{} products listed", listed.len());
        }
        Command::History => {
            // Without a catalog, receipts fall back to derived names and unit prices
            if let Err(e) = load(&products).await {
                warn!("Catalog unavailable, showing history without product details: {}", e);
            }
            let catalog = products.snapshot().await.items;
            transactions.refresh().await;
            if let Some(message) = transactions.snapshot().await.error {
                return Err(Error::Backend { message });
            }
            for tx in transactions.history().await {
                let receipt = Receipt::new(&tx, &catalog);
                println!(
                    "#{:<5} {:<22} {} x {:<4} = {:>16}  {}",
                    tx.id,
                    receipt.product_name(),
                    format::format_rupiah(receipt.unit_price()),
                    tx.quantity,
                    format::format_rupiah(tx.total_price),
                    format::format_timestamp(tx.timestamp),
                );
            }
        }
        Command::Buy {
            product_id,
            quantity,
        } => {
            load(&products).await?;
            let product = products
                .find(product_id)
                .await
                .ok_or(Error::ProductNotFound { id: product_id })?;
            let adjusted = clamp_quantity(quantity, product.stock);
            if adjusted != quantity {
                warn!(
                    "Quantity {} adjusted to {} (stock {})",
                    quantity, adjusted, product.stock
                );
            }
            let created = transactions.purchase(&product, adjusted).await?;
            println!(
                "Pembelian berhasil: #{} {} x{} = {}",
                created.id,
                product.name,
                created.quantity,
                format::format_rupiah(created.total_price),
            );
        }
        Command::Update {
            id,
            product_id,
            quantity,
            total_price,
        } => {
            transactions
                .update(id, product_id, quantity, total_price)
                .await?;
            println!("Transaksi #{id} diperbarui");
        }
        Command::Delete { id } => {
            transactions.delete(id).await?;
            println!("Transaksi #{id} dihapus");
        }
    }

    Ok(())
}

async fn load(products: &ProductsState) -> Result<()> {
    products.refresh().await;
    match products.snapshot().await.error {
        Some(message) => Err(Error::Backend { message }),
        None => Ok(()),
    }
}

fn print_product(product: &Product) {
    println!(
        "{:>4}  {:<24} {:<26} stok {:>5}  {}",
        product.id,
        product.name,
        product.category.name(),
        product.stock,
        format::format_rupiah(product.price),
    );
}
