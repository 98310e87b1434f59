//! Salon Website
//!
//! Booking wizard and salon dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Four-step booking wizard with live time slot availability
//! - Booking confirmation page
//! - Dashboard with revenue and appointment charts, staff performance
//!   and customer feedback, refreshed every five minutes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Booking rules live in the `salon-booking` core; this crate
//! renders them and talks to the salon API over `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
