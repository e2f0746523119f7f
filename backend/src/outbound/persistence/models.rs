//! Internal Diesel row structs.
//!
//! These never leave the persistence module; repositories convert them into
//! domain types at the boundary.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    NewProduct, NewProductImage, NewUser, Product, ProductId, ProductImage, UserId, UserProfile,
};

use super::schema::{product_images, products, users};

/// Profile projection of the users table. The password hash is never selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserProfileRow {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub role: String,
}

impl From<UserProfileRow> for UserProfile {
    fn from(row: UserProfileRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            contact: row.contact,
            email: row.email,
            role: row.role,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub contact: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub password_hash: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            contact: &user.contact,
            email: &user.email,
            role: &user.role,
            password_hash: &user.password_hash,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub value: Option<f64>,
    pub condition: Option<String>,
    pub availability: bool,
    pub lender_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: ProductId::new(row.product_id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            value: row.value,
            condition: row.condition,
            availability: row.availability,
            lender_id: UserId::new(row.lender_id),
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: Option<&'a str>,
    pub value: Option<f64>,
    pub condition: Option<&'a str>,
    pub availability: bool,
    pub lender_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            description: &product.description,
            price: product.price,
            category: product.category.as_deref(),
            value: product.value,
            condition: product.condition.as_deref(),
            availability: product.availability,
            lender_id: product.lender_id.get(),
            start_date: product.start_date,
            end_date: product.end_date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = product_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductImageRow {
    pub image_id: i64,
    pub product_id: i64,
    pub image_url: String,
}

impl From<ProductImageRow> for ProductImage {
    fn from(row: ProductImageRow) -> Self {
        Self {
            image_id: row.image_id,
            product_id: ProductId::new(row.product_id),
            image_url: row.image_url,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = product_images)]
pub(crate) struct NewProductImageRow<'a> {
    pub product_id: i64,
    pub image_url: &'a str,
}

impl<'a> From<&'a NewProductImage> for NewProductImageRow<'a> {
    fn from(image: &'a NewProductImage) -> Self {
        Self {
            product_id: image.product_id.get(),
            image_url: &image.image_url,
        }
    }
}
