//! Diesel table definitions.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `email` carries a unique constraint.
    users (id) {
        id -> Int8,
        name -> Text,
        contact -> Text,
        email -> Text,
        role -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    /// Products offered for rent by a lender.
    products (product_id) {
        product_id -> Int8,
        name -> Text,
        description -> Nullable<Text>,
        price -> Float8,
        category -> Nullable<Text>,
        value -> Nullable<Float8>,
        condition -> Nullable<Text>,
        availability -> Bool,
        lender_id -> Int8,
        start_date -> Nullable<Date>,
        end_date -> Nullable<Date>,
    }
}

diesel::table! {
    /// One row per product image URL.
    product_images (image_id) {
        image_id -> Int8,
        product_id -> Int8,
        image_url -> Text,
    }
}

diesel::joinable!(products -> users (lender_id));
diesel::joinable!(product_images -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(users, products, product_images);
