mod params;
pub mod resolver;

pub use params::{AllowedMethods, Params, WILDCARD_PARAM, param};
pub use resolver::{Resolution, find_route, resolve};
