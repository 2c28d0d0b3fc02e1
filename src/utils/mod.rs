//! Shared helpers: dates, markup escaping and permissive deserializers.

pub mod date;
pub mod de;
pub mod html;
