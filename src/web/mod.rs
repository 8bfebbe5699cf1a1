//! Browser frontend.
//!
//! A single server-rendered page (Askama) for shortening URLs and viewing
//! their QR codes. The page talks to the JSON API from `static/app.js`.

pub mod handlers;
pub mod routes;
