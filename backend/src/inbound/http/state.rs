//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ItemCatalogueCommand, ItemCatalogueQuery, ProductRepository, UserLookupQuery,
    UserRegistrationCommand, UserRepository,
};
use crate::domain::{ItemCatalogueService, UserAccountService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub user_lookup: Arc<dyn UserLookupQuery>,
    pub registration: Arc<dyn UserRegistrationCommand>,
    pub items: Arc<dyn ItemCatalogueCommand>,
    pub items_query: Arc<dyn ItemCatalogueQuery>,
}

impl HttpState {
    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use tradebridge::inbound::http::state::HttpState;
    /// use tradebridge::outbound::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::from_repositories(store.clone(), store);
    /// let _lookup = state.user_lookup.clone();
    /// ```
    pub fn from_repositories<U, P>(users: Arc<U>, products: Arc<P>) -> Self
    where
        U: UserRepository + 'static,
        P: ProductRepository + 'static,
    {
        let accounts = Arc::new(UserAccountService::new(users));
        let catalogue = Arc::new(ItemCatalogueService::new(products));
        Self {
            user_lookup: accounts.clone(),
            registration: accounts,
            items: catalogue.clone(),
            items_query: catalogue,
        }
    }
}
