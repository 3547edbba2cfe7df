use crate::model::Order;

/// Orders whose customer name contains `query`, ignoring case, in list order.
/// An empty query returns every order.
pub fn filter_by_customer<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    let query = query.trim();
    orders
        .iter()
        .filter(|order| order.matches_customer(query))
        .collect()
}
