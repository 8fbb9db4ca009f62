pub mod equipment;
pub mod events;
pub mod gear;
pub mod health;
pub mod players;
pub mod routes;
