pub mod customer;
pub mod engine;
pub mod environmental;
pub mod financial;
pub mod region;
pub mod result;
pub mod sizing;
pub mod tariff;
pub mod topology;
