// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access layer.

pub mod api;
pub mod gateway;

pub use api::EcoApi;
pub use gateway::FetchGateway;
