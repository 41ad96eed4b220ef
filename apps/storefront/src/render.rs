//! # Text Rendering
//!
//! Turns command responses into terminal text.
//!
//! ```text
//! Greenify Co.                                      Cart (3)
//! ────────────────────────────────────────────────────────────
//! Your Cart
//!   Total items: 3
//!   Total cost:  € 64.97
//!
//!   monstera  Monstera Deliciosa       € 24.99  x2   € 49.98
//!   pothos    Epipremnum (Efeutute)    € 14.99  x1   € 14.99
//! ```
//!
//! The cart badge in the header only appears when the cart holds something.

use std::fmt::{self, Display, Formatter};

use greenify_core::{CartEvent, CartSummary, CategorySection, LineItem, Money, Product};

use crate::commands::cart::{CartResponse, CartUpdate};
use crate::commands::checkout::CheckoutResponse;
use crate::shell::{HelpEntry, Response};
use crate::state::{ConfigState, Session};

const RULE_WIDTH: usize = 60;

/// Greeting printed once when the shell starts.
pub fn welcome(config: &ConfigState) -> String {
    format!(
        "Welcome to {}!\nWe bring fresh green into your home. Type 'products' to browse or 'help' for commands.",
        config.store_name
    )
}

/// Renders a response. Output always ends with a newline.
pub fn response(response: &Response, session: &Session) -> String {
    Page { response, session }.to_string()
}

/// A response laid out as a terminal page.
struct Page<'a> {
    response: &'a Response,
    session: &'a Session,
}

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let config = &self.session.config;

        match self.response {
            Response::Products(sections) => {
                header(f, config, &self.session.cart.summary())?;
                products(f, config, sections)
            }
            Response::Product(p) => product(f, config, p),
            Response::Cart(cart) => {
                header(f, config, &cart.totals)?;
                cart_page(f, config, cart)
            }
            Response::Update(update) => cart_update(f, config, update),
            Response::Checkout(c) => checkout(f, config, c),
            Response::Config(c) => config_page(f, c),
            Response::Help(entries) => help(f, entries),
            Response::Quit => Ok(()),
        }
    }
}

fn money(config: &ConfigState, amount: Money) -> String {
    amount.format_with(&config.currency_symbol)
}

fn header(f: &mut Formatter<'_>, config: &ConfigState, totals: &CartSummary) -> fmt::Result {
    let badge = if totals.total_quantity > 0 {
        format!("Cart ({})", totals.total_quantity)
    } else {
        "Cart".to_string()
    };
    let pad = RULE_WIDTH.saturating_sub(config.store_name.chars().count());
    writeln!(f, "{}{:>pad$}", config.store_name, badge, pad = pad)?;
    writeln!(f, "{}", "─".repeat(RULE_WIDTH))
}

fn products(f: &mut Formatter<'_>, config: &ConfigState, sections: &[CategorySection]) -> fmt::Result {
    writeln!(f, "Our Plants")?;
    for section in sections {
        writeln!(f)?;
        writeln!(f, "{}", section.category)?;
        for listing in &section.products {
            let marker = if listing.in_cart { "(in cart)" } else { "[add]" };
            writeln!(
                f,
                "  {:<10} {:<28} {:>10}  {}",
                listing.product.id,
                listing.product.name,
                money(config, listing.product.price()),
                marker
            )?;
        }
    }
    Ok(())
}

fn product(f: &mut Formatter<'_>, config: &ConfigState, p: &Product) -> fmt::Result {
    writeln!(f, "{} ({})", p.name, p.id)?;
    writeln!(f, "  Category: {}", p.category)?;
    writeln!(f, "  Price:    {}", money(config, p.price()))?;
    if let Some(image) = &p.image {
        writeln!(f, "  Image:    {}", image)?;
    }
    Ok(())
}

fn cart_page(f: &mut Formatter<'_>, config: &ConfigState, cart: &CartResponse) -> fmt::Result {
    writeln!(f, "Your Cart")?;
    writeln!(f, "  Total items: {}", cart.totals.total_quantity)?;
    writeln!(f, "  Total cost:  {}", money(config, cart.totals.total_cost))?;
    writeln!(f)?;

    if cart.items.is_empty() {
        return writeln!(f, "  Your cart is empty. Type 'products' to keep shopping.");
    }

    for item in &cart.items {
        line_item(f, config, item)?;
    }
    writeln!(f)?;
    writeln!(f, "  'checkout' to pay, 'clear' to empty the cart.")
}

fn line_item(f: &mut Formatter<'_>, config: &ConfigState, item: &LineItem) -> fmt::Result {
    writeln!(
        f,
        "  {:<10} {:<28} {:>10}  x{:<4} {:>10}",
        item.product.id,
        item.product.name,
        money(config, item.product.price()),
        item.quantity,
        money(config, item.line_total())
    )
}

fn cart_update(f: &mut Formatter<'_>, config: &ConfigState, update: &CartUpdate) -> fmt::Result {
    match &update.event {
        Some(CartEvent::Added { product_id }) => writeln!(f, "Added {} to the cart.", product_id)?,
        Some(CartEvent::Incremented { product_id, quantity })
        | Some(CartEvent::Decremented { product_id, quantity }) => {
            writeln!(f, "{} quantity is now {}.", product_id, quantity)?
        }
        Some(CartEvent::Removed { product_id }) => {
            writeln!(f, "Removed {} from the cart.", product_id)?
        }
        Some(CartEvent::Cleared { removed }) => {
            writeln!(f, "Cart cleared ({} items removed).", removed)?
        }
        None => writeln!(f, "Nothing changed.")?,
    }
    writeln!(
        f,
        "  Cart: {} items, {}",
        update.cart.totals.total_quantity,
        money(config, update.cart.totals.total_cost)
    )
}

fn checkout(f: &mut Formatter<'_>, config: &ConfigState, c: &CheckoutResponse) -> fmt::Result {
    writeln!(f, "{}", c.message)?;
    writeln!(
        f,
        "  Your cart ({} items, {}) is kept for you.",
        c.totals.total_quantity,
        money(config, c.totals.total_cost)
    )
}

fn config_page(f: &mut Formatter<'_>, c: &ConfigState) -> fmt::Result {
    writeln!(f, "Store:    {}", c.store_name)?;
    writeln!(f, "Currency: {}", c.currency_symbol)?;
    match &c.catalog_path {
        Some(path) => writeln!(f, "Catalog:  {}", path.display())?,
        None => writeln!(f, "Catalog:  embedded")?,
    }
    writeln!(f, "Output:   {:?}", c.output)
}

fn help(f: &mut Formatter<'_>, entries: &[HelpEntry]) -> fmt::Result {
    for entry in entries {
        writeln!(f, "  {:<12} {}", entry.usage, entry.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart as cart_cmd;
    use crate::state::load_catalog;

    fn session() -> Session {
        let config = ConfigState::default();
        let catalog = load_catalog(&config).unwrap();
        Session::new(config, catalog)
    }

    #[test]
    fn test_header_badge_hidden_when_empty() {
        let session = session();
        let text = response(&Response::Cart(cart_cmd::get_cart(&session.cart)), &session);

        let first_line = text.lines().next().unwrap();
        assert!(first_line.starts_with("Greenify Co."));
        assert!(!first_line.contains("Cart ("));
        assert!(text.contains("Your cart is empty."));
        assert!(text.contains("Total cost:  € 0.00"));
    }

    #[test]
    fn test_header_badge_shows_quantity() {
        let mut session = session();
        cart_cmd::add_to_cart(&session.catalog, &mut session.cart, "monstera").unwrap();
        cart_cmd::increment_item(&mut session.cart, "monstera");

        let text = response(&Response::Cart(cart_cmd::get_cart(&session.cart)), &session);

        assert!(text.lines().next().unwrap().ends_with("Cart (2)"));
        assert!(text.contains("Total cost:  € 49.98"));
        assert!(text.contains("x2"));
    }

    #[test]
    fn test_catalog_marks_items_in_cart() {
        let mut session = session();
        cart_cmd::add_to_cart(&session.catalog, &mut session.cart, "ficus").unwrap();

        let sections = crate::commands::product::list_products(&session.catalog, &session.cart);
        let text = response(&Response::Products(sections), &session);

        let ficus = text.lines().find(|l| l.contains("Ficus Elastica")).unwrap();
        let zz = text.lines().find(|l| l.contains("Zamioculcas")).unwrap();
        assert!(ficus.ends_with("(in cart)"));
        assert!(zz.ends_with("[add]"));
        assert!(text.contains("Hängepflanzen"));
    }

    #[test]
    fn test_noop_update_message() {
        let mut session = session();
        let update = cart_cmd::increment_item(&mut session.cart, "ghost");
        let text = response(&Response::Update(update), &session);
        assert!(text.starts_with("Nothing changed."));
    }

    #[test]
    fn test_config_and_help_pages() {
        let session = session();

        let text = response(&Response::Config(session.config.clone()), &session);
        assert!(text.contains("Catalog:  embedded"));
        assert!(text.ends_with("Output:   Text\n"));

        let text = response(&Response::Help(crate::shell::HELP.to_vec()), &session);
        assert_eq!(text.lines().count(), crate::shell::HELP.len());
        assert!(response(&Response::Quit, &session).is_empty());
    }

    #[test]
    fn test_custom_currency_symbol() {
        let mut session = session();
        session.config.currency_symbol = "EUR".to_string();
        cart_cmd::add_to_cart(&session.catalog, &mut session.cart, "pothos").unwrap();

        let update = cart_cmd::increment_item(&mut session.cart, "pothos");
        let text = response(&Response::Update(update), &session);
        assert!(text.contains("EUR 29.98"));
    }
}
