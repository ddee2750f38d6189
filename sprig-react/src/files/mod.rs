//! Generators for the three files that make up a scaffolded element.

mod component_tsx;
mod css_module;
mod index_ts;

pub use component_tsx::ComponentTsx;
pub use css_module::CssModule;
pub use index_ts::IndexTs;
