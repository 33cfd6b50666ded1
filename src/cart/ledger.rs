use crate::models::CartLineItem;

/// The ordered cart: line items in insertion order.
///
/// Append never merges lines. The same catalog item may appear on several
/// lines, each with its own quantity, notes, and add-ons.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLineItem>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line at the end. Always succeeds.
    pub fn append(&mut self, line: CartLineItem) {
        self.lines.push(line);
    }

    /// Remove every line for the given catalog item id.
    ///
    /// Returns how many lines were dropped; an absent id removes nothing.
    pub fn remove_by_item_id(&mut self, item_id: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.item_id() != item_id);
        before - self.lines.len()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Total servings across all lines (the cart badge figure).
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity()).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|line| line.line_total()).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
