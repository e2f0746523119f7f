//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{ProductRepository, UserRepository};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Build the API application over the given repositories.
pub fn test_app<U, P>(
    users: Arc<U>,
    products: Arc<P>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    App::new()
        .app_data(web::Data::new(HttpState::from_repositories(users, products)))
        .wrap(Trace)
        .configure(configure)
}
