//! # Storefront CLI
//!
//! Commands, their execution against a `StorefrontContainer`, and the
//! interactive `shell` that keeps one container alive across commands.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use sf_01_catalog::{CatalogApi, NewProductForm};
use sf_02_cart::{CartApi, CartSnapshot};
use sf_03_admin_session::AdminSessionApi;
use shared_bus::StorefrontEvent;
use shared_types::{Product, ProductId};

use crate::container::StorefrontContainer;

/// Storefront: product catalog, shopping cart and admin console
#[derive(Parser, Debug)]
#[command(name = "storefront", version)]
#[command(about = "Browse products, manage a cart and run the admin console")]
pub struct Cli {
    /// Directory holding the storage file (overrides STOREFRONT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep all state in memory for this process only
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List products
    Products {
        /// Only products whose name or category contains TERM
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one product
    Product { id: String },
    /// Add a product to the cart
    Add {
        id: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Set a cart line's quantity (0 or less removes it)
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove a product from the cart
    Remove { id: String },
    /// Empty the cart
    Clear,
    /// Show the cart and order summary
    Cart,
    /// Log in to the admin console
    Login { username: String, password: String },
    /// Log out of the admin console
    Logout,
    /// Show the logged-in admin
    Whoami,
    /// Admin console commands (login required)
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Run commands interactively against one session
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// Product table with stock levels
    Products,
    /// Add a product to the catalog
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Decimal price, e.g. 1499.50
        #[arg(long)]
        price: String,
        #[arg(long)]
        stock: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Runs one command and writes its output.
pub fn execute(container: &mut StorefrontContainer, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Products { search } => {
            let catalog = container.catalog.read();
            let products = catalog.search(search.as_deref().unwrap_or(""));
            if products.is_empty() {
                writeln!(out, "No products found")?;
            }
            for product in products {
                write_product_row(out, product)?;
            }
        }

        Command::Product { id } => {
            let product = find_product(container, &id)?;
            writeln!(out, "{} [{}]", product.name, product.id)?;
            writeln!(out, "  {}", product.description)?;
            writeln!(out, "  Price:    {}", product.price)?;
            writeln!(out, "  Category: {}", product.category)?;
            writeln!(out, "  Stock:    {} ({})", product.stock, product.stock_level().label())?;
            if let Some(left) = product.scarcity_hint() {
                writeln!(out, "  Only {left} left!")?;
            }
        }

        Command::Add { id, qty } => {
            if qty == 0 {
                bail!("Quantity must be at least 1");
            }
            let product = find_product(container, &id)?;
            if !product.is_in_stock() {
                bail!("Out of stock");
            }
            let qty = qty.min(product.stock);
            container.cart.add_many(&product, qty);
            let line = container.cart.line(&product.id).map_or(0, |l| l.quantity);
            writeln!(out, "Added {} x{} (in cart: {line})", product.name, qty)?;
        }

        Command::Set { id, qty } => {
            container.cart.update_quantity(&ProductId::new(id), qty);
            write_cart(out, &container.cart.snapshot())?;
        }

        Command::Remove { id } => {
            container.cart.remove_from_cart(&ProductId::new(id));
            write_cart(out, &container.cart.snapshot())?;
        }

        Command::Clear => {
            container.cart.clear_cart();
            writeln!(out, "Cart cleared")?;
        }

        Command::Cart => {
            let snapshot = container.cart.snapshot();
            write_cart(out, &snapshot)?;
            if !snapshot.is_empty() {
                let summary = container.cart.summary();
                writeln!(out, "Subtotal: {}", summary.subtotal)?;
                writeln!(out, "Shipping: Free")?;
                writeln!(out, "Tax (GST 18%): {}", summary.tax)?;
                writeln!(out, "Total: {}", summary.total)?;
            }
        }

        Command::Login { username, password } => {
            let user = container.admin.login(&username, &password)?;
            writeln!(out, "Welcome, {}", user.name)?;
        }

        Command::Logout => {
            container.admin.logout();
            writeln!(out, "Logged out")?;
        }

        Command::Whoami => match container.admin.current_admin() {
            Some(user) => writeln!(out, "{} ({})", user.name, user.username)?,
            None => writeln!(out, "Not logged in")?,
        },

        Command::Admin(admin) => {
            let user = container.admin.require_admin()?.username.clone();
            execute_admin(container, admin, &user, out)?;
        }

        Command::Shell => bail!("already in a shell"),
    }

    for notice in container.drain_events() {
        if let StorefrontEvent::CartPersistFailed { reason } = notice {
            writeln!(out, "warning: cart could not be saved: {reason}")?;
        }
    }
    let missed = container.take_missed_events();
    if missed > 0 {
        writeln!(out, "warning: {missed} change notices were missed")?;
    }

    Ok(())
}

fn execute_admin(
    container: &mut StorefrontContainer,
    command: AdminCommand,
    username: &str,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        AdminCommand::Products => {
            let catalog = container.catalog.read();
            writeln!(out, "{} products (admin: {username})", catalog.len())?;
            for product in catalog.products() {
                writeln!(
                    out,
                    "{:<38} {:<30} {:>12} {:>5} {}",
                    product.id,
                    product.name,
                    product.price.to_string(),
                    product.stock,
                    product.stock_level().label()
                )?;
            }
        }

        AdminCommand::AddProduct {
            name,
            description,
            price,
            stock,
            category,
            image_url,
        } => {
            let form = NewProductForm {
                name,
                description,
                price,
                stock,
                category,
                image_url,
            };
            let product = container.catalog.write().add_product(form)?;
            writeln!(out, "Added product {} [{}]", product.name, product.id)?;
        }
    }
    Ok(())
}

/// Reads commands from `input` until EOF or `exit`.
///
/// Errors are printed and the shell keeps going.
pub fn run_shell(
    container: &mut StorefrontContainer,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "storefront shell. Type `help` for commands, `exit` to quit.")?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading shell input")? == 0 {
            break;
        }

        let tokens = match split_words(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        match tokens.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            _ => {}
        }

        match ShellLine::try_parse_from(tokens) {
            Ok(ShellLine {
                command: Command::Shell,
            }) => writeln!(out, "error: already in a shell")?,
            Ok(parsed) => {
                if let Err(e) = execute(container, parsed.command, out) {
                    writeln!(out, "error: {e}")?;
                }
            }
            Err(e) => write!(out, "{}", e.render())?,
        }
    }
    Ok(())
}

/// Splits a shell line on whitespace. Double quotes group words.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        bail!("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn find_product(container: &StorefrontContainer, id: &str) -> Result<Product> {
    match container.catalog.read().product(&ProductId::new(id)) {
        Some(product) => Ok(product.clone()),
        None => bail!("no product with id {id}"),
    }
}

fn write_product_row(out: &mut dyn Write, product: &Product) -> Result<()> {
    let badge = match product.scarcity_hint() {
        Some(left) => format!("  Only {left} left!"),
        None if !product.is_in_stock() => "  Out of stock".to_string(),
        None => String::new(),
    };
    writeln!(
        out,
        "{:>3}  {:<30} {:>12}  {}{badge}",
        product.id,
        product.name,
        product.price.to_string(),
        product.category
    )?;
    Ok(())
}

fn write_cart(out: &mut dyn Write, snapshot: &CartSnapshot) -> Result<()> {
    if snapshot.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }
    writeln!(out, "Cart ({} items)", snapshot.item_count)?;
    for line in &snapshot.items {
        writeln!(
            out,
            "{:>3}  {:<30} {:>4} x {:>12} = {:>12}",
            line.product_id,
            line.name,
            line.quantity,
            line.unit_price.to_string(),
            line.line_total().to_string()
        )?;
    }
    Ok(())
}
