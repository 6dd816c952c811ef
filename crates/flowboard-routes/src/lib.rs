//! Flowboard Routes
//!
//! The dashboard's client-side route table. Each route maps a path template
//! such as `/deployments/deployment/$id` to the page that renders it.
//!
//! The table answers two questions:
//! - which page handles a concrete URL path (and with which parameters)
//! - which concrete path a template resolves to for a set of parameters
//!
//! The second one backs [`LinkResolver`], the seam renderers use to turn a
//! declared link target into an href without building URLs themselves.

mod error;
mod page;
mod resolver;
mod table;

pub use error::RouteError;
pub use page::Page;
pub use resolver::LinkResolver;
pub use table::{DEPLOYMENT_ROUTE, Route, RouteMatch, RouteParams, RouteTable};
