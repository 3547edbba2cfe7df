use crate::model::Order;
use crate::view::{filter_by_customer, Summary};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const TITLE: &str = "Factory ERP Dashboard";
pub const EMPTY_STATE: &str = "No orders found.";

/// How the order list is laid out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row per order.
    #[default]
    Table,
    /// One block per order.
    Cards,
}

/// A per-row control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Complete,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Complete => "[complete]",
            RowAction::Delete => "[delete]",
        }
    }
}

/// Controls offered for an order. Completion is hidden once the order is completed.
pub fn row_actions(order: &Order) -> Vec<RowAction> {
    if order.is_completed() {
        vec![RowAction::Delete]
    } else {
        vec![RowAction::Complete, RowAction::Delete]
    }
}

fn actions_cell(order: &Order) -> String {
    row_actions(order)
        .into_iter()
        .map(RowAction::label)
        .collect::<Vec<_>>()
        .join(" ")
}

fn id_cell(order: &Order) -> String {
    order
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

/// Renders the order list as text.
#[derive(Debug, Clone, Default)]
pub struct OrderView {
    pub layout: Layout,
    pub search: String,
    pub show_summary: bool,
}

impl OrderView {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Orders that pass the current search.
    pub fn visible<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        filter_by_customer(orders, &self.search)
    }

    /// Title, optional summary (over the whole list), then the visible orders.
    pub fn render(&self, orders: &[Order]) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push('\n');
        if self.show_summary {
            out.push_str(&Summary::of(orders).to_string());
            out.push('\n');
        }
        out.push('\n');

        let visible = self.visible(orders);
        if visible.is_empty() {
            out.push_str(EMPTY_STATE);
            out.push('\n');
            return out;
        }

        match self.layout {
            Layout::Table => render_table(&mut out, &visible),
            Layout::Cards => render_cards(&mut out, &visible),
        }
        out
    }
}

const HEADERS: [&str; 8] = [
    "ID", "Customer", "Product", "Gauge", "Size", "Qty", "Status", "Actions",
];

fn render_table(out: &mut String, orders: &[&Order]) {
    let rows: Vec<[String; 8]> = orders
        .iter()
        .map(|order| {
            [
                id_cell(order),
                order.customer_name.clone(),
                order.product.clone(),
                order.gauge.clone(),
                order.size.clone(),
                order.quantity.to_string(),
                order.status.to_string(),
                actions_cell(order),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers = HEADERS.map(String::from);
    write_row(out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn render_cards(out: &mut String, orders: &[&Order]) {
    for (index, order) in orders.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} ({})", order.customer_name, id_cell(order));
        let _ = writeln!(out, "  Product: {}", order.product);
        let _ = writeln!(out, "  Gauge: {}", order.gauge);
        let _ = writeln!(out, "  Size: {}", order.size);
        let _ = writeln!(out, "  Quantity: {}", order.quantity);
        let _ = writeln!(out, "  Status: {}", order.status);
        let _ = writeln!(out, "  {}", actions_cell(order));
    }
}
