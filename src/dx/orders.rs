//! Orders module.
//!
//! Typed access to the `orders` collection backing the account area's order
//! history: paged listing and single-order reads.

use std::collections::HashMap;

use derive_builder::Builder;
use time::OffsetDateTime;

use crate::{
    core::{utils::time::parse_utc_datetime, AcademyError, Deserializer, Transport},
    dx::client::AcademyClientInstance,
};

pub(crate) const ORDERS_PATH: &str = "orders";

/// One line of an order.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct OrderItem {
    /// Purchased course.
    pub course_id: u64,

    /// Course title at purchase time.
    pub title: String,

    #[serde(default)]
    pub price: Option<f64>,
}

/// One order, as the service reports it.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: u64,

    /// Order status (`completed`, `pending`, `refunded`, …).
    #[serde(default)]
    pub status: Option<String>,

    /// Placement timestamp as reported by the service, UTC without a zone
    /// designator. See [`Order::placed_at`].
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub total: Option<f64>,

    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Placement time as an [`OffsetDateTime`], when the service reported one.
    pub fn placed_at(&self) -> Option<Result<OffsetDateTime, AcademyError>> {
        self.date.as_deref().map(parse_utc_datetime)
    }
}

/// One page of the order history.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct OrdersPage {
    /// Orders on this page.
    pub orders: Vec<Order>,

    /// Total number of orders.
    #[serde(default)]
    pub total: u64,

    /// Total number of pages.
    #[serde(default)]
    pub pages: u64,
}

/// The [`ListOrdersRequest`] is used by [`list_orders`] to collect paging and
/// status filters before the request is issued with `execute()`.
///
/// [`list_orders`]: crate::dx::client::AcademyClientInstance::list_orders
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private))]
pub struct ListOrdersRequest<T, D> {
    #[builder(setter(custom))]
    pub(super) client: AcademyClientInstance<T, D>,

    /// Restrict results to one order status.
    #[builder(setter(strip_option, into), default = "None")]
    pub(super) status: Option<String>,

    /// Page number, 1-based.
    #[builder(setter(strip_option), default = "None")]
    pub(super) page: Option<u32>,

    /// Page size.
    #[builder(setter(strip_option), default = "None")]
    pub(super) per_page: Option<u32>,
}

impl<T, D> ListOrdersRequest<T, D> {
    fn query_params(&self) -> HashMap<String, String> {
        let mut query: HashMap<String, String> = HashMap::new();

        if let Some(status) = &self.status {
            query.insert("status".to_string(), status.clone());
        }

        if let Some(page) = self.page {
            query.insert("paged".to_string(), page.to_string());
        }

        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }

        query
    }
}

impl<T, D> ListOrdersRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Execute the request and return the result.
    ///
    /// This method is asynchronous and will return a future that resolves to
    /// an [`OrdersPage`] or [`AcademyError`].
    pub async fn execute(self) -> Result<OrdersPage, AcademyError> {
        let request = self
            .build()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))?;

        let query = request.query_params();
        request.client.resource(ORDERS_PATH).list(query).await
    }
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Create a new order history builder.
    ///
    /// Instance of [`ListOrdersRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// let history = academy.list_orders().page(1).per_page(20).execute().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_orders(&self) -> ListOrdersRequestBuilder<T, D> {
        ListOrdersRequestBuilder {
            client: Some(self.clone()),
            ..Default::default()
        }
    }
}

impl<T, D> AcademyClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Fetch one order by id.
    pub async fn order(&self, id: u64) -> Result<Order, AcademyError> {
        self.resource(ORDERS_PATH).get(id).await
    }
}
