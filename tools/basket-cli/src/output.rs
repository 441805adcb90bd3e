//! Output formatting for the CLI.

use basket_commerce::cart::Cart;
use basket_commerce::store::Notifier;
use console::style;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print the cart as a table, or as JSON in JSON mode.
    pub fn cart(&self, cart: &Cart) {
        if self.json {
            self.json(&CartView::from(cart));
            return;
        }

        if cart.is_empty() {
            self.info("Cart is empty");
            return;
        }

        let widths = [6, 32, 10, 6, 10];
        let header = format_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
        println!("  {}", style(header).bold());

        for line in cart {
            let id = line.id().to_string();
            let price = format_price(line.product.price);
            let amount = line.amount.to_string();
            let subtotal = format_price(line.subtotal());
            self.table_row(
                &[&id, &line.product.name, &price, &amount, &subtotal],
                &widths,
            );
        }

        println!();
        self.kv("items", &cart.item_count().to_string());
        self.kv("subtotal", &format_price(cart.subtotal()));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Prints store notifications to the terminal.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    output: Output,
}

impl ConsoleNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        self.output.error(message);
    }
}

/// JSON shape printed by `basket show --json`.
#[derive(Debug, serde::Serialize)]
struct CartView<'a> {
    items: &'a Cart,
    item_count: i64,
    subtotal: f64,
}

impl<'a> From<&'a Cart> for CartView<'a> {
    fn from(cart: &'a Cart) -> Self {
        Self {
            items: cart,
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        }
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Format a price with two decimals.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_commerce::prelude::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(179.9), "179.90");
    }

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["1", "Shoe"], &[4, 6]), "1     Shoe");
    }

    #[test]
    fn test_cart_view_json() {
        let cart = Cart::new()
            .with_item(LineItem::new(Product::new(ProductId::new(1), "Shoe", 10.0), 2))
            .with_item(LineItem::new(Product::new(ProductId::new(2), "Sock", 2.5), 1));

        let value = serde_json::to_value(CartView::from(&cart)).unwrap();

        assert_eq!(value["item_count"], 3);
        assert_eq!(value["subtotal"], 22.5);
        assert_eq!(value["items"][0]["id"], 1);
        assert_eq!(value["items"][0]["amount"], 2);
        assert_eq!(value["items"][1]["name"], "Sock");
    }
}
