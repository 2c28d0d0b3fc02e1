//! Configuration section definitions.
//!
//! Each module corresponds to a section in `realnet.toml`:
//!
//! | Module         | TOML Section        | Purpose                              |
//! |----------------|---------------------|--------------------------------------|
//! | `site`         | `[site]`            | Page metadata fallbacks              |
//! | `organization` | `[organization]`    | Business identity for JSON-LD        |
//! | `sitemap`      | `[sitemap]`         | Entry defaults and static routes     |
//! | `build`        | `[build]`/`[robots]`| Output directory, robots directives  |

mod build;
mod organization;
mod site;
mod sitemap;

pub use build::{BuildConfig, RobotsConfig};
pub use organization::{AddressConfig, OrganizationConfig};
pub use site::SiteDefaults;
pub use sitemap::{RouteConfig, SitemapConfig};
