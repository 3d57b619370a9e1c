macro_rules! method_shortcuts {
    ($($name:ident => $method:expr;)*) => {
        $(
            pub fn $name<H>(&self, pattern: &str, handler: H) -> RouterResult<()>
            where
                H: Handler<B, R>,
            {
                self.handle(pattern, handler, [$method])
            }
        )*
    };
}

mod group;
mod options;
mod service;

pub use group::Group;
pub use options::{
    DEFAULT_MAX_CONSTRAINT_LEN, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
