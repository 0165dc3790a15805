pub mod balance;
pub mod route;
pub mod search;
pub mod selector;

pub use balance::LoadBalancer;
pub use route::Route;
pub use search::{all_routes, shortest_route};
pub use selector::RouteSelector;
