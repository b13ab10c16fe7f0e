//! Domain state: catalog read models, the cart, placed orders, users.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartEntry};
pub use order::{OrderItem, OrderLog, OrderRecord, OrderStatus};
pub use product::{Category, Product};
pub use user::{Staff, User};
