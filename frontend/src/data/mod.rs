pub mod companies;
pub mod editorial;
pub mod products;
