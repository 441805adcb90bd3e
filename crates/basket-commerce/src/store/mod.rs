//! The client-side cart store.
//!
//! One [`CartStore`] holds the authoritative cart for a session. Handles are
//! cheap to clone and all clones share the same state, so UI components take
//! a handle instead of reaching for a global.
//!
//! Every mutating operation follows the same shape:
//!
//! 1. snapshot the current cart,
//! 2. await any remote lookups,
//! 3. compute the next cart from the snapshot,
//! 4. commit it (replace, notify subscribers, persist).
//!
//! Operations do not coordinate with each other. Two operations in flight at
//! once both start from the same snapshot and the later commit wins.

pub mod notify;
mod persistence;

use std::sync::Arc;

use basket_cache::{Cache, CacheError};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api::{HttpStorefrontApi, StorefrontApi};
use crate::cart::{Cart, LineItem};
use crate::config::StoreConfig;
use crate::error::{CartError, LookupError, Operation};
use crate::ids::ProductId;

pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use persistence::CartPersistence;

/// Errors building a store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The persistence backend could not be read.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Fetch(#[from] basket_data::FetchError),
}

/// Payload for [`CartStore::update_product_amount`].
///
/// `amount` is a delta added to the current quantity, not a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Shared handle to the session's cart.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn StorefrontApi>,
    persistence: CartPersistence,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Cart>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.inner.persistence.key())
            .field("items", &self.inner.state.borrow().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store, loading the initial cart from `persistence`.
    pub fn new(
        api: Arc<dyn StorefrontApi>,
        persistence: CartPersistence,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CacheError> {
        let initial = persistence.load()?;
        info!(
            key = persistence.key(),
            items = initial.len(),
            "cart store initialized"
        );
        let (state, _) = watch::channel(initial);
        Ok(Self {
            inner: Arc::new(Inner {
                api,
                persistence,
                notifier,
                state,
            }),
        })
    }

    /// Create a store talking HTTP to the configured API.
    pub fn from_config(
        config: &StoreConfig,
        cache: Cache,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StoreError> {
        let api = HttpStorefrontApi::from_config(config)?;
        let persistence = CartPersistence::new(cache, config);
        Ok(Self::new(Arc::new(api), persistence, notifier)?)
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.inner.state.borrow().clone()
    }

    /// Observe committed carts. The receiver starts at the current cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.state.subscribe()
    }

    /// The persistence slot this store writes to.
    pub fn persistence(&self) -> &CartPersistence {
        &self.inner.persistence
    }

    /// Live available quantity for a product.
    pub async fn product_stock(&self, product_id: ProductId) -> Result<i64, LookupError> {
        Ok(self.inner.api.stock(product_id).await?.amount)
    }

    /// Add one unit of a product.
    ///
    /// Rejected when the product has no stock at all. Whether the cart
    /// already holds as many units as are in stock is not checked here.
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let op = Operation::AddProduct;
        let result = self.try_add_product(product_id).await;
        self.settle(op, product_id, result)
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let op = Operation::AddProduct;
        let snapshot = self.cart();

        self.ensure_in_stock(op, product_id).await?;

        let next = if snapshot.contains(product_id) {
            snapshot.with_amount_delta(product_id, 1)
        } else {
            let product = self
                .inner
                .api
                .product(product_id)
                .await
                .map_err(|e| CartError::failed(op, product_id, e))?;
            snapshot.with_item(LineItem::new(product, 1))
        };

        Ok(self.commit(op, next))
    }

    /// Drop a product's line. Absent products leave the cart as it was.
    pub fn remove_product(&self, product_id: ProductId) -> Cart {
        let next = self.cart().without(product_id);
        self.commit(Operation::RemoveProduct, next)
    }

    /// Add `update.amount` (a delta, possibly negative) to a line's quantity.
    ///
    /// Only positive deltas consult stock. Decrements always go through and
    /// may take the quantity to zero or below.
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let op = Operation::UpdateProductAmount;
        let result = self.try_update_product_amount(update).await;
        self.settle(op, update.product_id, result)
    }

    async fn try_update_product_amount(
        &self,
        UpdateProductAmount { product_id, amount }: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let op = Operation::UpdateProductAmount;
        let snapshot = self.cart();

        if amount > 0 {
            self.ensure_in_stock(op, product_id).await?;
        }

        let next = snapshot.with_amount_delta(product_id, amount);
        Ok(self.commit(op, next))
    }

    async fn ensure_in_stock(&self, op: Operation, product_id: ProductId) -> Result<(), CartError> {
        let available = self
            .product_stock(product_id)
            .await
            .map_err(|e| CartError::failed(op, product_id, e))?;

        if available <= 0 {
            return Err(CartError::OutOfStock {
                operation: op,
                product_id,
            });
        }
        Ok(())
    }

    /// Emit exactly one notification for a failed operation.
    fn settle(
        &self,
        op: Operation,
        product_id: ProductId,
        result: Result<Cart, CartError>,
    ) -> Result<Cart, CartError> {
        if let Err(e) = &result {
            warn!(operation = %op, %product_id, error = %e, "cart operation rejected");
            self.inner.notifier.error(e.notification());
        }
        result
    }

    /// Replace the cart, wake subscribers, then persist.
    ///
    /// A failed write is logged; the in-memory cart stays committed.
    fn commit(&self, op: Operation, next: Cart) -> Cart {
        self.inner.state.send_replace(next.clone());
        debug!(
            operation = %op,
            items = next.len(),
            units = next.item_count(),
            "cart committed"
        );

        if let Err(e) = self.inner.persistence.save(&next) {
            warn!(
                key = self.inner.persistence.key(),
                error = %e,
                "failed to persist cart"
            );
        }
        next
    }
}
