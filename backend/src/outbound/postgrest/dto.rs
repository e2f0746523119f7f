//! Wire DTOs for PostgREST table rows and error bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    NewProduct, NewProductImage, NewUser, Product, ProductId, ProductImage, UserId, UserProfile,
};

pub(super) const USERS_TABLE: &str = "users";
pub(super) const PRODUCTS_TABLE: &str = "products";
pub(super) const PRODUCT_IMAGES_TABLE: &str = "product_images";

/// Profile projection; `password_hash` is never requested.
pub(super) const USER_PROFILE_COLUMNS: &str = "id,name,contact,email,role";
pub(super) const PRODUCT_COLUMNS: &str = "product_id,name,description,price,category,value,\
condition,availability,lender_id,start_date,end_date";
pub(super) const PRODUCT_IMAGE_COLUMNS: &str = "image_id,product_id,image_url";

#[derive(Debug, Deserialize)]
pub(super) struct UserProfileDto {
    id: i64,
    name: String,
    contact: String,
    email: String,
    role: String,
}

impl From<UserProfileDto> for UserProfile {
    fn from(dto: UserProfileDto) -> Self {
        Self {
            id: UserId::new(dto.id),
            name: dto.name,
            contact: dto.contact,
            email: dto.email,
            role: dto.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewUserDto<'a> {
    name: &'a str,
    contact: &'a str,
    email: &'a str,
    role: &'a str,
    password_hash: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserDto<'a> {
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

#[derive(Debug, Deserialize)]
pub(super) struct ProductDto {
    product_id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    condition: Option<String>,
    availability: bool,
    lender_id: i64,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            product_id: ProductId::new(dto.product_id),
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category: dto.category,
            value: dto.value,
            condition: dto.condition,
            availability: dto.availability,
            lender_id: UserId::new(dto.lender_id),
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewProductDto<'a> {
    name: &'a str,
    description: &'a str,
    price: f64,
    category: Option<&'a str>,
    value: Option<f64>,
    condition: Option<&'a str>,
    availability: bool,
    lender_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> From<&'a NewProduct> for NewProductDto<'a> {
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

#[derive(Debug, Deserialize)]
pub(super) struct ProductImageDto {
    image_id: i64,
    product_id: i64,
    image_url: String,
}

impl From<ProductImageDto> for ProductImage {
    fn from(dto: ProductImageDto) -> Self {
        Self {
            image_id: dto.image_id,
            product_id: ProductId::new(dto.product_id),
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewProductImageDto<'a> {
    product_id: i64,
    image_url: &'a str,
}

impl<'a> From<&'a NewProductImage> for NewProductImageDto<'a> {
    fn from(image: &'a NewProductImage) -> Self {
        Self {
            product_id: image.product_id.get(),
            image_url: &image.image_url,
        }
    }
}

/// Error body PostgREST returns for rejected requests.
#[derive(Debug, Deserialize)]
pub(super) struct PostgrestErrorDto {
    #[serde(default)]
    pub(super) code: Option<String>,
    #[serde(default)]
    pub(super) message: Option<String>,
}
